//! Diagnostic sinks for option readers and registration
//!
//! Readers and the container report non-fatal problems (conflicting declarations,
//! unreadable config files, invalid values) through a [`DiagnosticSink`] instead of
//! failing the pass. The surrounding system picks the sink per pass: a silent sink
//! for the discovery pass, a console sink for the final pass, a memory sink in tests.

use std::cell::{Cell, RefCell};

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// Receiver for leveled diagnostics emitted during option processing
pub trait DiagnosticSink {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
}

/// Sink that forwards diagnostics to the `log` facade and counts errors
///
/// The error count drives the process exit code after the final read pass.
#[derive(Default)]
pub struct ConsoleSink {
    errors: Cell<usize>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of errors reported so far
    pub fn error_count(&self) -> usize {
        self.errors.get()
    }
}

impl DiagnosticSink for ConsoleSink {
    fn error(&self, message: &str) {
        self.errors.set(self.errors.get() + 1);
        log::error!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Sink that discards everything, used for the discovery pass
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn error(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

/// Sink that records diagnostics in memory for inspection
#[derive(Default)]
pub struct MemorySink {
    messages: RefCell<Vec<(DiagnosticLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics in emission order
    pub fn messages(&self) -> Vec<(DiagnosticLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded error messages only
    pub fn errors(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == DiagnosticLevel::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((DiagnosticLevel::Error, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((DiagnosticLevel::Warning, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((DiagnosticLevel::Info, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.warning("first");
        sink.error("second");
        sink.info("third");

        let messages = sink.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (DiagnosticLevel::Warning, "first".to_string()));
        assert_eq!(sink.errors(), vec!["second".to_string()]);
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn test_console_sink_counts_errors() {
        let sink = ConsoleSink::new();
        assert_eq!(sink.error_count(), 0);
        sink.error("one");
        sink.warning("not counted");
        sink.error("two");
        assert_eq!(sink.error_count(), 2);
    }
}
