//! Abstract Factory demo
//!
//! Creates a Button and a TextEdit from the factory for the configured
//! platform and exercises both.

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
    log!("abstract_factory starting, platform={}", config.platform);

    let root = CompositionRoot::new(config);
    match root.run_factory_demo() {
        Ok(_) => {
            log!("abstract_factory finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("FATAL: {}", e);
            println!("{}", e);
            ExitCode::from(1)
        }
    }
}
