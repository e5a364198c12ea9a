//! RunBuilderDemo - client code for the window builders
//!
//! For each family: build the default window, hand it off, reset, then build
//! a titled window.

use crate::application::ports::ConsolePort;
use crate::domain::DomainError;
use crate::window::{
    MacOSWindowBuilder, NativeWindow, WindowBuilder, WindowCreationManager, WindowsWindowBuilder,
};

/// Title for the second recipe when none is configured
pub const DEFAULT_CUSTOM_TITLE: &str = "New title";

/// Run both recipes against one builder
///
/// Returns the two finished windows in the order they were built.
fn build_pair<B>(
    builder: &mut B,
    console: &dyn ConsolePort,
    title: &str,
) -> Result<(B::Window, B::Window), DomainError>
where
    B: WindowBuilder,
{
    let mut manager = WindowCreationManager::new();
    manager.set_builder(builder);

    manager.create_default_window()?;
    let default_window = manager.builder_mut()?.take_window();
    default_window.print_structure(console);

    manager.builder_mut()?.reset();
    manager.create_window_with_title(title)?;
    let titled_window = manager.builder_mut()?.take_window();
    titled_window.print_structure(console);

    Ok((default_window, titled_window))
}

/// Build default and titled windows for Windows, then MacOS
///
/// Returns the four structure descriptions in build order.
pub fn run_builder_demo(console: &dyn ConsolePort, title: &str) -> Result<Vec<String>, DomainError> {
    let mut structures = Vec::with_capacity(4);

    let mut windows_builder = WindowsWindowBuilder::new();
    let (first, second) = build_pair(&mut windows_builder, console, title)?;
    structures.push(first.structure().to_string());
    structures.push(second.structure().to_string());

    let mut macos_builder = MacOSWindowBuilder::new();
    let (first, second) = build_pair(&mut macos_builder, console, title)?;
    structures.push(first.structure().to_string());
    structures.push(second.structure().to_string());

    crate::log!("run_builder_demo: built {} windows", structures.len());
    Ok(structures)
}
