//! Ledger domain models and the in-memory budget manager.

pub mod budget;
pub mod manager;

pub use budget::{Budget, Transaction};
pub use manager::{parse_amount, BudgetEdit, DeleteOutcome, LedgerManager};
