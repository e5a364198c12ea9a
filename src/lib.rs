//! Creational Widgets - Abstract Factory and Builder with cross-platform widgets
//!
//! Two independent demonstrations share this library:
//! - `widget`: a factory hands out a matched Button/TextEdit family
//! - `window`: builders assemble window descriptions step by step, driven by
//!   a `WindowCreationManager`
//!
//! The binaries in `src/bin` wire these up through `infrastructure::CompositionRoot`.

#[macro_use]
pub mod log;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod widget;
pub mod window;

pub use domain::{DomainError, Platform};
pub use shared::Config;
