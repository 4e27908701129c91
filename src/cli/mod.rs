pub mod output;
pub mod prompts;
mod runner;
pub mod screen;
pub mod script;

pub use runner::run_wizard;
