use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
    #[error("No budget selected")]
    NoBudgetSelected,
}
