//! Domain layer error types
//!
//! All errors that can occur while selecting a widget family or running a
//! construction recipe.

use thiserror::Error;

use super::platform::Platform;

/// Main domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No widget family exists for the selected platform
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(Platform),

    /// A recipe was run before a builder was attached
    #[error("No window builder set")]
    NoBuilder,
}
