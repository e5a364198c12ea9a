//! Widget families (Abstract Factory)
//!
//! Each platform provides a `Button` and a `TextEdit`. A `WindowApplication`
//! hands out widgets of exactly one family, so callers cannot mix them.

pub mod factory;
pub mod macos;
pub mod traits;
pub mod windows;

pub use factory::{factory_for, MacOSWindowApplication, WindowApplication, WindowsWindowApplication};
pub use traits::{Button, TextEdit};
