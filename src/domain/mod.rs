//! Domain Layer - Platform selection and errors
//!
//! Contains no I/O. Everything else in the crate depends on these types.

pub mod errors;
pub mod platform;

pub use errors::DomainError;
pub use platform::Platform;
