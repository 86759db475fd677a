use serde::{Deserialize, Serialize};

/// A single expense recorded against a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

/// A named pool of money with its expense history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub name: String,
    pub balance: f64,
    pub transactions: Vec<Transaction>,
}

impl Budget {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            transactions: Vec::new(),
        }
    }
}
