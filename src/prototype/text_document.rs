use std::fmt;

use design_patterns_derive::Withers;

use super::render_list;

/// A titled text document with tags.
///
/// The constructor copies the supplied tags, so the document never shares
/// storage with the caller.
///
/// # Examples
///
/// ```
/// use design_patterns::prototype::TextDocument;
///
/// let mut tags = vec!["draft".to_string()];
/// let document = TextDocument::new("Report", "Initial content", "Alice", &tags);
///
/// tags.push("external".to_string());
/// assert_eq!(document.tags(), ["draft"]);
///
/// let updated = document.with_content("Updated content".to_string());
/// assert_eq!(updated.content(), "Updated content");
/// assert_eq!(updated.tags(), document.tags());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Withers)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextDocument {
    title: String,
    content: String,
    author: String,
    tags: Vec<String>,
}

impl TextDocument {
    /// Creates a document, copying every tag.
    pub fn new<I, S>(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Read-only view of the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Consumes the document and hands the tags to the caller.
    #[must_use]
    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "TextDocument[title={}, content={}, author={}, tags={}]",
            self.title,
            self.content,
            self.author,
            render_list(&self.tags)
        )
    }
}
