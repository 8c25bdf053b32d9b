//! Out-of-band diagnostics reporting.
//!
//! Separate from the core logic so the crate can be used as a library
//! without printing side effects: the collector only talks to the
//! [`DiagnosticsSink`] trait.

use std::cell::RefCell;

use colored::Colorize;

/// Fire-and-forget sink for warnings emitted during collection.
pub trait DiagnosticsSink {
    fn warn(&self, message: &str);
}

/// Prints warnings to stderr in cargo style.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn warn(&self, message: &str) {
        eprintln!("{}: {}", "warning".bold().yellow(), message);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Keeps warnings in memory for inspection (used in tests and by callers
/// that post-process diagnostics themselves).
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticsSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
