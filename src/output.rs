//! Console output collaborators.
//!
//! The demos never print directly. They hand each line to a [`MessageSink`],
//! which accepts a string and returns nothing. The binary uses
//! [`StdoutSink`]; tests use [`RecordingSink`] and assert on the captured
//! lines.

use std::cell::RefCell;

/// Receiver for demo console lines.
pub trait MessageSink {
    /// Emits one line of output.
    fn emit(&self, line: &str);
}

/// Writes every line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every emitted line in memory.
///
/// Not thread-safe; intended for single-threaded tests.
///
/// # Examples
///
/// ```
/// use design_patterns::output::{MessageSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// sink.emit("hello");
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns `true` if any captured line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }
}

impl MessageSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<S: MessageSink + ?Sized> MessageSink for &S {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

static_assertions::assert_not_impl_any!(RecordingSink: Sync);
