//! Prototype pattern: new documents are produced by copying existing ones.
//!
//! Both document kinds own every collection they hold. Constructors copy
//! their inputs element by element, `clone` copies again, and the generated
//! `with_*` methods derive a new document that differs in one field.
//!
//! [`Document`] closes the set of document kinds so callers dispatch with an
//! exhaustive `match`.

mod document;
mod spreadsheet_document;
mod text_document;

pub use document::Document;
pub use spreadsheet_document::SpreadsheetDocument;
pub use text_document::TextDocument;

/// Renders items as `[a, b, c]`.
fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
