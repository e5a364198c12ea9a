//! Infrastructure Layer - concrete adapters and wiring

pub mod composition_root;
pub mod console;

pub use composition_root::CompositionRoot;
pub use console::StdoutConsole;
