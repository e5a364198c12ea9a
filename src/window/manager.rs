//! WindowCreationManager - named construction recipes
//!
//! The manager borrows a builder, it never owns one. The finished window is
//! taken from the builder afterwards, through `builder_mut`.

use super::builder::WindowBuilder;
use crate::domain::DomainError;

/// Title used by `create_default_window`
pub const DEFAULT_WINDOW_TITLE: &str = "New Window";

/// Sequences builder steps into reusable recipes
pub struct WindowCreationManager<'b, B>
where
    B: WindowBuilder + ?Sized,
{
    builder: Option<&'b mut B>,
}

impl<'b, B> WindowCreationManager<'b, B>
where
    B: WindowBuilder + ?Sized,
{
    /// Create a manager with no builder attached
    pub fn new() -> Self {
        Self { builder: None }
    }

    /// Attach a builder, returning the one it replaces
    pub fn set_builder(&mut self, builder: &'b mut B) -> Option<&'b mut B> {
        self.builder.replace(builder)
    }

    /// Access the attached builder
    pub fn builder_mut(&mut self) -> Result<&mut B, DomainError> {
        self.builder.as_deref_mut().ok_or(DomainError::NoBuilder)
    }

    /// Standard window titled "New Window"
    pub fn create_default_window(&mut self) -> Result<(), DomainError> {
        self.create_window_with_title(DEFAULT_WINDOW_TITLE)
    }

    /// Standard window with a caller-supplied title
    pub fn create_window_with_title(&mut self, title: &str) -> Result<(), DomainError> {
        let builder = self.builder_mut()?;
        crate::log!("WindowCreationManager: building window '{}'", title);
        builder.create_native_window();
        builder.add_menubar();
        builder.set_title(title);
        builder.set_default_background_color();
        Ok(())
    }
}

impl<'b, B> Default for WindowCreationManager<'b, B>
where
    B: WindowBuilder + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}
