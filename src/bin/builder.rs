//! Builder demo
//!
//! Builds a default and a titled window with each platform's builder.

use std::process::ExitCode;

use creational_widgets::infrastructure::CompositionRoot;
use creational_widgets::{log, Config};

fn main() -> ExitCode {
    // Log to the default location until the config says otherwise
    log::init(&log::default_log_path());

    let config = match Config::load().and_then(Config::with_env_overrides) {
        Ok(c) => c,
        Err(e) => {
            log!("FATAL: Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(1);
        }
    };

    let log_path = config.log_path();
    if log_path != log::default_log_path() {
        log::init(&log_path);
    }
    log!("builder starting");

    let root = CompositionRoot::new(config);
    match root.run_builder_demo() {
        Ok(structures) => {
            log!("builder finished with {} windows", structures.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("FATAL: {}", e);
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
