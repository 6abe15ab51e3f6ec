//! Integration tests for document prototypes.
//!
//! Documents are cloned from prototypes and must never share storage with
//! the caller that built them or with each other.

use design_patterns::prototype::{Document, SpreadsheetDocument, TextDocument};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

fn grid() -> Vec<Vec<String>> {
    vec![
        vec!["A1".to_string(), "B1".to_string(), "C1".to_string()],
        vec!["A2".to_string(), "B2".to_string(), "C2".to_string()],
    ]
}

#[fixture]
fn report() -> TextDocument {
    TextDocument::new("Report", "Initial content", "Alice", ["draft", "2026"])
}

#[fixture]
fn sheet() -> SpreadsheetDocument {
    SpreadsheetDocument::new("Sheet1", &grid(), 2, 3)
}

// =============================================================================
// TextDocument
// =============================================================================

#[rstest]
fn test_text_clone_equals_source(report: TextDocument) {
    let cloned = report.clone();

    assert_eq!(cloned, report);
    assert_eq!(cloned.to_string(), report.to_string());
}

#[rstest]
fn test_text_constructor_copies_tags() {
    let mut tags = vec!["draft".to_string(), "2026".to_string()];
    let document = TextDocument::new("Report", "Initial content", "Alice", &tags);

    tags.push("modified-external-list".to_string());
    tags[0].push_str("-changed");

    assert_eq!(document.tags(), ["draft", "2026"]);
}

#[rstest]
fn test_text_with_content_keeps_tags(report: TextDocument) {
    let updated = report.with_content("Updated content".to_string());

    assert_eq!(updated.content(), "Updated content");
    assert_eq!(updated.tags(), report.tags());
    assert_eq!(report.content(), "Initial content");
    assert_ne!(updated, report);
}

#[rstest]
fn test_text_display(report: TextDocument) {
    assert_eq!(
        report.to_string(),
        "TextDocument[title=Report, content=Initial content, author=Alice, tags=[draft, 2026]]"
    );
}

#[rstest]
fn test_text_into_tags_is_an_owned_copy(report: TextDocument) {
    let mut tags = report.clone().into_tags();
    tags.clear();

    assert_eq!(report.tags().len(), 2);
}

// =============================================================================
// SpreadsheetDocument
// =============================================================================

#[rstest]
fn test_sheet_constructor_deep_copies_rows() {
    let mut table = grid();
    let document = SpreadsheetDocument::new("Sheet1", &table, 2, 3);

    table[0][0] = "A1-modified".to_string();
    table.push(vec!["A3".to_string()]);

    assert_eq!(document.content(), "[[A1, B1, C1], [A2, B2, C2]]");
    assert_eq!(document.cell(0, 0), Some("A1"));
}

#[rstest]
fn test_sheet_clone_is_independent(sheet: SpreadsheetDocument) {
    let mut data = sheet.clone().into_data();
    data[1][2] = "changed".to_string();
    let derived = sheet.with_data(data);

    assert_eq!(sheet.cell(1, 2), Some("C2"));
    assert_eq!(derived.cell(1, 2), Some("changed"));
    assert_eq!(derived.rows(), sheet.rows());
}

#[rstest]
#[case(0, 0, Some("A1"))]
#[case(1, 2, Some("C2"))]
#[case(2, 0, None)]
#[case(0, 3, None)]
fn test_sheet_cell(
    sheet: SpreadsheetDocument,
    #[case] row: usize,
    #[case] column: usize,
    #[case] expected: Option<&str>,
) {
    assert_eq!(sheet.cell(row, column), expected);
}

#[rstest]
fn test_sheet_dimensions_are_stored_verbatim() {
    let sheet = SpreadsheetDocument::new("Mismatch", &grid(), 7, 1);

    assert_eq!(sheet.rows(), 7);
    assert_eq!(sheet.columns(), 1);
    assert_eq!(sheet.data().len(), 2);
}

// =============================================================================
// Document
// =============================================================================

#[rstest]
fn test_prototype_copies_each_kind(report: TextDocument, sheet: SpreadsheetDocument) {
    let prototypes = [Document::from(report), Document::from(sheet)];

    for prototype in &prototypes {
        let copy = prototype.prototype();
        assert_eq!(&copy, prototype);
        assert_eq!(copy.kind(), prototype.kind());
        assert_eq!(copy.content(), prototype.content());
    }
}

#[rstest]
fn test_document_content_by_kind(report: TextDocument, sheet: SpreadsheetDocument) {
    assert_eq!(Document::from(report).content(), "Initial content");
    assert_eq!(
        Document::from(sheet).content(),
        "[[A1, B1, C1], [A2, B2, C2]]"
    );
}
