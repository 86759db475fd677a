//! Interactive menu CLI for the budget ledger.

pub mod core;
mod handlers;
pub mod menu;
pub mod output;
mod prompts;
mod shell;

pub use shell::run_cli;
