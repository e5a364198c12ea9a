//! StdoutConsole - writes trace lines to standard output

use std::io::Write;

use crate::application::ports::ConsolePort;

#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsolePort for StdoutConsole {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", line);
    }
}
