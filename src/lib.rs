#![doc(test(attr(deny(warnings))))]

//! Tallybook keeps a set of named budgets with transaction logs in memory and
//! exposes them through an interactive menu CLI and report exporters.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tallybook tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
