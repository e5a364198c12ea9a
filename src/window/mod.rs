//! Window construction (Builder)
//!
//! Builders append structure fragments to a window; the
//! `WindowCreationManager` drives them through fixed recipes.

pub mod builder;
pub mod manager;
pub mod product;

pub use builder::{MacOSWindowBuilder, WindowBuilder, WindowsWindowBuilder};
pub use manager::{WindowCreationManager, DEFAULT_WINDOW_TITLE};
pub use product::{MacOSWindow, NativeWindow, WindowsWindow};
