#![doc(test(attr(deny(warnings))))]

//! Signup Core offers the state machine, validation, and pricing primitives
//! behind a multi-step subscription signup wizard, plus the interactive
//! terminal frontend that drives it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;
pub mod validator;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Signup Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
