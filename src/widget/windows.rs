//! Windows widget family

use std::rc::Rc;

use super::traits::{Button, TextEdit};
use crate::application::ports::ConsolePort;
use crate::domain::Platform;

pub struct WindowsButton {
    console: Rc<dyn ConsolePort>,
}

impl WindowsButton {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self { console }
    }
}

impl Button for WindowsButton {
    fn button_click(&self) {
        crate::log!("WindowsButton: click");
        self.console.write_line("Windows button was clicked");
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct WindowsTextEdit {
    console: Rc<dyn ConsolePort>,
    text: String,
}

impl WindowsTextEdit {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self {
            console,
            text: String::new(),
        }
    }
}

impl TextEdit for WindowsTextEdit {
    fn get_text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.console
            .write_line(&format!("Windows TextEdit text set to '{}'", self.text));
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}
