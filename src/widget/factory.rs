//! Widget factory - creates a matched family of widgets
//!
//! Callers only see `Button` and `TextEdit`; the concrete family is decided
//! once, when the factory is chosen.

use std::rc::Rc;

use super::macos::{MacOSButton, MacOSTextEdit};
use super::traits::{Button, TextEdit};
use super::windows::{WindowsButton, WindowsTextEdit};
use crate::application::ports::ConsolePort;
use crate::domain::{DomainError, Platform};

/// Abstract factory for one widget family
pub trait WindowApplication {
    /// Create a new button of this family
    fn create_button(&self) -> Box<dyn Button>;

    /// Create a new text field of this family
    fn create_text_edit(&self) -> Box<dyn TextEdit>;

    /// Family produced by this factory
    fn platform(&self) -> Platform;
}

pub struct WindowsWindowApplication {
    console: Rc<dyn ConsolePort>,
}

impl WindowsWindowApplication {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self { console }
    }
}

impl WindowApplication for WindowsWindowApplication {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton::new(self.console.clone()))
    }

    fn create_text_edit(&self) -> Box<dyn TextEdit> {
        Box::new(WindowsTextEdit::new(self.console.clone()))
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

pub struct MacOSWindowApplication {
    console: Rc<dyn ConsolePort>,
}

impl MacOSWindowApplication {
    pub fn new(console: Rc<dyn ConsolePort>) -> Self {
        Self { console }
    }
}

impl WindowApplication for MacOSWindowApplication {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOSButton::new(self.console.clone()))
    }

    fn create_text_edit(&self) -> Box<dyn TextEdit> {
        Box::new(MacOSTextEdit::new(self.console.clone()))
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }
}

/// Pick the factory for a platform
///
/// `Platform::None` has no family and is reported as an error; nothing is
/// constructed in that case.
pub fn factory_for(
    platform: Platform,
    console: Rc<dyn ConsolePort>,
) -> Result<Box<dyn WindowApplication>, DomainError> {
    crate::log!("factory_for: {}", platform);
    match platform {
        Platform::Windows => Ok(Box::new(WindowsWindowApplication::new(console))),
        Platform::MacOS => Ok(Box::new(MacOSWindowApplication::new(console))),
        Platform::None => Err(DomainError::UnsupportedPlatform(platform)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MemoryConsole, NullConsole};

    #[test]
    fn test_factory_family_matches() {
        for platform in [Platform::Windows, Platform::MacOS] {
            let factory = factory_for(platform, Rc::new(NullConsole)).unwrap();
            let button = factory.create_button();
            let edit = factory.create_text_edit();

            assert_eq!(factory.platform(), platform);
            assert_eq!(button.platform(), platform);
            assert_eq!(edit.platform(), platform);
        }
    }

    #[test]
    fn test_factory_traces_share_family() {
        let console = Rc::new(MemoryConsole::new());
        let factory = factory_for(Platform::MacOS, console.clone()).unwrap();

        factory.create_button().button_click();
        factory.create_text_edit().set_text("x");

        for line in console.lines() {
            assert!(line.starts_with("MacOS "), "unexpected trace: {}", line);
        }
    }

    #[test]
    fn test_factory_creates_fresh_widgets() {
        let factory = factory_for(Platform::Windows, Rc::new(NullConsole)).unwrap();
        let mut first = factory.create_text_edit();
        let second = factory.create_text_edit();

        first.set_text("only first");

        assert_eq!(first.get_text(), "only first");
        assert_eq!(second.get_text(), "");
    }

    #[test]
    fn test_factory_for_none_fails() {
        let result = factory_for(Platform::None, Rc::new(NullConsole));
        assert!(matches!(
            result,
            Err(DomainError::UnsupportedPlatform(Platform::None))
        ));
    }
}
