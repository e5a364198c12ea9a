//! Application Ports - Interfaces for external dependencies

pub mod console_port;

pub use console_port::{ConsolePort, MemoryConsole, NullConsole};
