//! RunFactoryDemo - client code for the widget factory
//!
//! Works only through `WindowApplication`, so the same code drives any family.

use crate::application::ports::ConsolePort;
use crate::widget::WindowApplication;

/// Text written into the text field when none is configured
pub const DEFAULT_TEXT: &str = "Hello OS";

/// Click a button and round-trip text through a text field
///
/// Returns the text read back from the field.
pub fn run_factory_demo(
    factory: &dyn WindowApplication,
    console: &dyn ConsolePort,
    text: &str,
) -> String {
    crate::log!("run_factory_demo: platform={}", factory.platform());

    let button = factory.create_button();
    button.button_click();

    let mut text_edit = factory.create_text_edit();
    text_edit.set_text(text);

    let current = text_edit.get_text().to_string();
    console.write_line(&format!("TextEdit contains '{}'", current));
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MemoryConsole;
    use crate::domain::Platform;
    use crate::widget::factory_for;
    use std::rc::Rc;

    #[test]
    fn test_windows_end_to_end() {
        let console = Rc::new(MemoryConsole::new());
        let factory = factory_for(Platform::Windows, console.clone()).unwrap();

        let text = run_factory_demo(&*factory, &*console, DEFAULT_TEXT);

        assert_eq!(text, "Hello OS");
        assert_eq!(
            console.lines(),
            vec![
                "Windows button was clicked",
                "Windows TextEdit text set to 'Hello OS'",
                "TextEdit contains 'Hello OS'",
            ]
        );
    }

    #[test]
    fn test_macos_end_to_end() {
        let console = Rc::new(MemoryConsole::new());
        let factory = factory_for(Platform::MacOS, console.clone()).unwrap();

        let text = run_factory_demo(&*factory, &*console, "Bonjour");

        assert_eq!(text, "Bonjour");
        assert_eq!(console.lines()[0], "MacOS button was clicked");
        assert_eq!(console.lines()[1], "MacOS TextEdit text set to 'Bonjour'");
    }
}
