//! Window products assembled by the builders
//!
//! A window is only a description of its structure, appended to step by step.

use crate::application::ports::ConsolePort;
use crate::domain::Platform;

/// Common read access to a built window
pub trait NativeWindow {
    /// Structure description accumulated so far
    fn structure(&self) -> &str;

    /// Family this window belongs to
    fn platform(&self) -> Platform;

    /// Write the structure description as one trace line
    fn print_structure(&self, console: &dyn ConsolePort) {
        console.write_line(self.structure());
    }

    /// Check whether no step has been applied yet
    fn is_empty(&self) -> bool {
        self.structure().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MacOSWindow {
    pub(crate) structure: String,
}

impl NativeWindow for MacOSWindow {
    fn structure(&self) -> &str {
        &self.structure
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowsWindow {
    pub(crate) structure: String,
}

impl NativeWindow for WindowsWindow {
    fn structure(&self) -> &str {
        &self.structure
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}
