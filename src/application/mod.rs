//! Application Layer - Ports and Use Cases
//!
//! - **Ports**: interfaces for external dependencies (trace output)
//! - **Use Cases**: the client code that drives each pattern end-to-end
//!
//! # Clean Architecture Rules
//! - Depends only on the domain, widget and window modules
//! - Defines ports that infrastructure implements

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
