use std::fmt;

use design_patterns_derive::Withers;

use super::render_list;

/// A named table of string cells.
///
/// Construction deep-copies the table: both the outer list and every row are
/// fresh allocations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Withers)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadsheetDocument {
    name: String,
    data: Vec<Vec<String>>,
    rows: usize,
    columns: usize,
}

impl SpreadsheetDocument {
    /// Creates a spreadsheet, copying every row and every cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_patterns::prototype::SpreadsheetDocument;
    ///
    /// let mut table = vec![vec!["A1".to_string(), "B1".to_string()]];
    /// let sheet = SpreadsheetDocument::new("Sheet1", &table, 1, 2);
    ///
    /// table[0][0] = "A1-modified".to_string();
    /// assert_eq!(sheet.content(), "[[A1, B1]]");
    /// ```
    pub fn new<T, R, S>(name: impl Into<String>, data: T, rows: usize, columns: usize) -> Self
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            data: data
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            rows,
            columns,
        }
    }

    /// Sheet name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the rows.
    #[must_use]
    pub fn data(&self) -> &[Vec<String>] {
        &self.data
    }

    /// Declared row count, as given at construction.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Declared column count, as given at construction.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `row`, `column`, if present.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.data
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    /// Renders the table as nested bracketed lists, e.g. `[[A1, B1], [A2, B2]]`.
    #[must_use]
    pub fn content(&self) -> String {
        let rendered: Vec<String> = self.data.iter().map(|row| render_list(row)).collect();
        render_list(&rendered)
    }

    /// Consumes the spreadsheet and hands the table to the caller.
    #[must_use]
    pub fn into_data(self) -> Vec<Vec<String>> {
        self.data
    }
}

impl fmt::Display for SpreadsheetDocument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "SpreadsheetDocument[name={}, data={}, rows={}, columns={}]",
            self.name,
            self.content(),
            self.rows,
            self.columns
        )
    }
}
