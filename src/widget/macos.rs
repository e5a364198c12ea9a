//! MacOS widget family

use std::rc::Rc;

use super::traits::{Button, TextEdit};
use crate::application::ports::ConsolePort;
use crate::domain::Platform;

pub struct MacOSButton {
    console: Rc<dyn ConsolePort>,
}

impl MacOSButton {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self { console }
    }
}

impl Button for MacOSButton {
    fn button_click(&self) {
        crate::log!("MacOSButton: click");
        self.console.write_line("MacOS button was clicked");
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }
}

pub struct MacOSTextEdit {
    console: Rc<dyn ConsolePort>,
    text: String,
}

impl MacOSTextEdit {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self {
            console,
            text: String::new(),
        }
    }
}

impl TextEdit for MacOSTextEdit {
    fn get_text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.console
            .write_line(&format!("MacOS TextEdit text set to '{}'", self.text));
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }
}
