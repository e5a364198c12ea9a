//! CompositionRoot - wires the demo components together
//!
//! Configuration is resolved once here and handed to the components that
//! need it; nothing below this reads configuration on its own.

use std::rc::Rc;

use crate::application::ports::ConsolePort;
use crate::application::use_cases::{run_builder_demo, run_factory_demo};
use crate::domain::DomainError;
use crate::infrastructure::console::StdoutConsole;
use crate::shared::Config;
use crate::widget::{factory_for, WindowApplication};

/// Application composition root - owns the console and resolved configuration
pub struct CompositionRoot {
    config: Config,
    console: Rc<dyn ConsolePort>,
}

impl CompositionRoot {
    /// Create a root that traces to stdout
    pub fn new(config: Config) -> Self {
        Self::with_console(config, Rc::new(StdoutConsole::new()))
    }

    /// Create a root with a custom console
    pub fn with_console(config: Config, console: Rc<dyn ConsolePort>) -> Self {
        Self { config, console }
    }

    /// The factory for the configured platform
    pub fn widget_factory(&self) -> Result<Box<dyn WindowApplication>, DomainError> {
        factory_for(self.config.platform, self.console.clone())
    }

    /// Run the Abstract Factory demo; returns the text read back
    pub fn run_factory_demo(&self) -> Result<String, DomainError> {
        let factory = self.widget_factory()?;
        Ok(run_factory_demo(
            &*factory,
            &*self.console,
            &self.config.text,
        ))
    }

    /// Run the Builder demo; returns the built structures
    pub fn run_builder_demo(&self) -> Result<Vec<String>, DomainError> {
        run_builder_demo(&*self.console, &self.config.title)
    }
}
