//! Use Cases - client code that exercises each creational pattern

pub mod run_builder_demo;
pub mod run_factory_demo;

pub use run_builder_demo::{run_builder_demo, DEFAULT_CUSTOM_TITLE};
pub use run_factory_demo::{run_factory_demo, DEFAULT_TEXT};
