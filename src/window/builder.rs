//! Window builders - assemble a window one step at a time
//!
//! Each builder owns exactly one window in progress. `take_window` moves it
//! out and leaves an empty one in its place, so a finished window always has
//! a single owner.

use super::product::{MacOSWindow, NativeWindow, WindowsWindow};

/// Steps shared by every window builder
pub trait WindowBuilder {
    type Window: NativeWindow;

    /// Discard the current window and start an empty one
    fn reset(&mut self);

    fn create_native_window(&mut self);

    fn add_menubar(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_default_background_color(&mut self);

    /// Borrow the window in progress
    fn window(&self) -> &Self::Window;

    /// Move the window out, leaving an empty one behind
    fn take_window(&mut self) -> Self::Window;
}

/// Title fragment, identical for every family
fn title_fragment(title: &str) -> String {
    format!("Window title: {};", title)
}

#[derive(Debug, Default)]
pub struct MacOSWindowBuilder {
    window: MacOSWindow,
}

impl MacOSWindowBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowBuilder for MacOSWindowBuilder {
    type Window = MacOSWindow;

    fn reset(&mut self) {
        crate::log!("MacOSWindowBuilder: reset");
        self.window = MacOSWindow::default();
    }

    fn create_native_window(&mut self) {
        self.window.structure.push_str("Window: Standard MacOS; ");
    }

    fn add_menubar(&mut self) {
        self.window.structure.push_str("Menubar: MacOS default; ");
    }

    fn set_title(&mut self, title: &str) {
        self.window.structure.push_str(&title_fragment(title));
    }

    fn set_default_background_color(&mut self) {
        self.window
            .structure
            .push_str("Background color: MacOS default; ");
    }

    fn window(&self) -> &MacOSWindow {
        &self.window
    }

    fn take_window(&mut self) -> MacOSWindow {
        std::mem::take(&mut self.window)
    }
}

#[derive(Debug, Default)]
pub struct WindowsWindowBuilder {
    window: WindowsWindow,
}

impl WindowsWindowBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowBuilder for WindowsWindowBuilder {
    type Window = WindowsWindow;

    fn reset(&mut self) {
        crate::log!("WindowsWindowBuilder: reset");
        self.window = WindowsWindow::default();
    }

    fn create_native_window(&mut self) {
        self.window.structure.push_str("Window: Standard Windows; ");
    }

    fn add_menubar(&mut self) {
        self.window.structure.push_str("Menubar: Windows default; ");
    }

    fn set_title(&mut self, title: &str) {
        self.window.structure.push_str(&title_fragment(title));
    }

    fn set_default_background_color(&mut self) {
        self.window
            .structure
            .push_str("Background color: Windows default; ");
    }

    fn window(&self) -> &WindowsWindow {
        &self.window
    }

    fn take_window(&mut self) -> WindowsWindow {
        std::mem::take(&mut self.window)
    }
}
