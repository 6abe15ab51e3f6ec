//! # design-patterns
//!
//! Classic creational and structural design patterns, each in its own small
//! module with tests.
//!
//! ## Overview
//!
//! The centrepiece is the validated immutable record: a value built through
//! an incremental builder, validated once at construction, compared by
//! content, copied deeply, and derived into variants that differ in one
//! field.
//!
//! - [`builder`]: `HttpRequest` and its builder (defaults, validation, snapshots)
//! - [`prototype`]: text and spreadsheet documents copied from prototypes
//! - [`factory`]: payment methods selected by type name
//! - [`adapter`]: three incompatible gateway SDKs behind one interface
//! - [`bridge`]: notification kinds decoupled from delivery channels
//! - [`singleton`]: connection pool and configuration manager
//!
//! Demo console output goes through [`output::MessageSink`]; [`demo`] holds
//! the walkthroughs driven by the `pattern-demo` binary.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for records; deserialising an
//!   `HttpRequest` re-runs builder validation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use design_patterns::builder::HttpRequest;
//! use design_patterns::error::ValidationError;
//!
//! let error = HttpRequest::builder().build().unwrap_err();
//! assert_eq!(error, ValidationError::MissingRequiredField { field: "url" });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod demo;
pub mod error;
pub mod factory;
pub mod output;
pub mod prototype;
pub mod singleton;

/// Re-exports of the record types and their error.
///
/// ```rust
/// use design_patterns::prelude::*;
///
/// let request = HttpRequest::builder().url("https://example.com").build().unwrap();
/// let document = TextDocument::new("T", "c", "a", ["tag"]);
/// # let _ = (request, document);
/// ```
pub mod prelude {
    pub use crate::builder::{HttpRequest, HttpRequestBuilder};
    pub use crate::error::ValidationError;
    pub use crate::prototype::{Document, SpreadsheetDocument, TextDocument};
    pub use design_patterns_derive::Withers;
}
