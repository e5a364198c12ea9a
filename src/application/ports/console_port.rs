//! ConsolePort - interface for human-readable trace output
//!
//! Widgets and windows report what they did through this port instead of
//! writing to stdout directly.

use std::cell::RefCell;

/// Port interface for trace output
pub trait ConsolePort {
    /// Write one trace line
    fn write_line(&self, line: &str);
}

/// A console that remembers every line, for testing
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Last line written, if any
    pub fn last_line(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl ConsolePort for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// A console that discards everything
pub struct NullConsole;

impl ConsolePort for NullConsole {
    fn write_line(&self, _line: &str) {}
}
