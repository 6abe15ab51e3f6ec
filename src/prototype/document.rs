use std::borrow::Cow;
use std::fmt;

use super::{SpreadsheetDocument, TextDocument};

/// Closed set of document kinds.
///
/// # Examples
///
/// ```
/// use design_patterns::prototype::{Document, TextDocument};
///
/// let source = Document::from(TextDocument::new("Notes", "hello", "Bob", ["t"]));
/// let copy = source.prototype();
///
/// assert_eq!(copy, source);
/// assert_eq!(copy.content(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Document {
    /// A text document.
    Text(TextDocument),
    /// A spreadsheet.
    Spreadsheet(SpreadsheetDocument),
}

impl Document {
    /// Produces an independent copy of this document.
    #[must_use]
    pub fn prototype(&self) -> Self {
        let copy = match self {
            Self::Text(text) => Self::Text(text.clone()),
            Self::Spreadsheet(sheet) => Self::Spreadsheet(sheet.clone()),
        };
        tracing::trace!(kind = copy.kind(), "document prototyped");
        copy
    }

    /// Returns the document's content as text.
    ///
    /// Text documents borrow their content; spreadsheets render their table.
    #[must_use]
    pub fn content(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.content()),
            Self::Spreadsheet(sheet) => Cow::Owned(sheet.content()),
        }
    }

    /// Short name of the document kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Spreadsheet(_) => "spreadsheet",
        }
    }
}

impl From<TextDocument> for Document {
    fn from(document: TextDocument) -> Self {
        Self::Text(document)
    }
}

impl From<SpreadsheetDocument> for Document {
    fn from(document: SpreadsheetDocument) -> Self {
        Self::Spreadsheet(document)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => fmt::Display::fmt(text, formatter),
            Self::Spreadsheet(sheet) => fmt::Display::fmt(sheet, formatter),
        }
    }
}
