use std::process;

use signup_core::cli::output::{self, OutputPreferences};
use signup_core::config::ConfigManager;
use signup_core::errors::SignupError;

fn main() {
    signup_core::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), SignupError> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;

    output::set_preferences(OutputPreferences {
        screen_reader_mode: config.screen_reader_mode,
        high_contrast_mode: config.high_contrast_mode,
        quiet_mode: config.quiet_mode,
    });

    let catalog = manager.load_catalog(&config)?;
    signup_core::cli::run_wizard(catalog)
}
