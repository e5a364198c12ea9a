//! Widget traits - Interfaces for the products of a widget family

use crate::domain::Platform;

/// A clickable button
pub trait Button {
    /// Handle a click
    fn button_click(&self);

    /// Family this button belongs to
    fn platform(&self) -> Platform;
}

/// A single-line text field
pub trait TextEdit {
    /// Current text
    ///
    /// The borrow is valid for as long as the widget is alive.
    fn get_text(&self) -> &str;

    /// Replace the current text
    fn set_text(&mut self, text: &str);

    /// Family this text field belongs to
    fn platform(&self) -> Platform;
}
