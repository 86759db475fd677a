use tracing::debug;

use crate::errors::LedgerError;
use crate::ledger::{Budget, Transaction};

/// Requested changes for an existing budget. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct BudgetEdit {
    pub rename: Option<String>,
    pub balance: Option<f64>,
}

/// Result of a delete request after the confirmation answer is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Parses user-entered text into an amount, rejecting non-numeric and
/// non-finite input. Sign checks are left to the individual operations.
pub fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LedgerError::InvalidInput(format!("`{trimmed}` is not a valid amount")))
}

/// In-memory collection of named budgets plus the currently selected one.
///
/// Budget names are unique and act as identifiers. The selection always
/// refers to an existing budget or is empty.
#[derive(Debug, Default)]
pub struct LedgerManager {
    budgets: Vec<Budget>,
    selected: Option<String>,
}

impl LedgerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new budget and makes it the selected one.
    pub fn create_budget(&mut self, name: &str, initial_amount: f64) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "budget name cannot be empty".into(),
            ));
        }
        if self.position(name).is_some() {
            return Err(LedgerError::InvalidInput(format!(
                "budget `{name}` already exists"
            )));
        }
        if !initial_amount.is_finite() {
            return Err(LedgerError::InvalidInput(
                "initial amount must be a finite number".into(),
            ));
        }
        if initial_amount <= 0.0 {
            return Err(LedgerError::InvalidInput(
                "initial amount must be greater than 0".into(),
            ));
        }
        self.budgets.push(Budget::new(name, initial_amount));
        self.selected = Some(name.to_string());
        debug!("budget `{}` created with initial amount {}", name, initial_amount);
        Ok(())
    }

    pub fn select_budget(&mut self, name: &str) -> Result<(), LedgerError> {
        let name = name.trim();
        let budget = self
            .find(name)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))?;
        self.selected = Some(budget.name.clone());
        Ok(())
    }

    /// Applies a rename and/or balance overwrite. Validation runs before any
    /// change, so a rejected edit leaves the budget untouched.
    pub fn edit_budget(&mut self, name: &str, edit: BudgetEdit) -> Result<(), LedgerError> {
        let name = name.trim();
        let position = self
            .position(name)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))?;

        let rename = match edit.rename {
            Some(new_name) => {
                let new_name = new_name.trim().to_string();
                if new_name.is_empty() {
                    return Err(LedgerError::InvalidInput(
                        "new budget name cannot be empty".into(),
                    ));
                }
                if new_name != name && self.position(&new_name).is_some() {
                    return Err(LedgerError::InvalidInput(format!(
                        "budget `{new_name}` already exists"
                    )));
                }
                Some(new_name)
            }
            None => None,
        };
        if let Some(new_balance) = edit.balance {
            if !new_balance.is_finite() {
                return Err(LedgerError::InvalidInput(
                    "new amount must be a finite number".into(),
                ));
            }
        }

        if let Some(new_name) = rename {
            if self.selected.as_deref() == Some(name) {
                self.selected = Some(new_name.clone());
            }
            self.budgets[position].name = new_name;
        }
        if let Some(new_balance) = edit.balance {
            self.budgets[position].balance = new_balance;
        }
        Ok(())
    }

    /// Removes a budget if the caller confirmed the deletion. The selection is
    /// cleared when it pointed at the removed budget.
    pub fn delete_budget(
        &mut self,
        name: &str,
        confirmed: bool,
    ) -> Result<DeleteOutcome, LedgerError> {
        let name = name.trim();
        let position = self
            .position(name)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))?;
        if !confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }
        let removed = self.budgets.remove(position);
        if self.selected.as_deref() == Some(removed.name.as_str()) {
            self.selected = None;
        }
        debug!("budget `{}` deleted", removed.name);
        Ok(DeleteOutcome::Deleted)
    }

    /// Records an expense against the selected budget and returns it. The
    /// balance may go negative.
    pub fn add_expense(
        &mut self,
        amount: f64,
        description: &str,
    ) -> Result<&Budget, LedgerError> {
        let selected = self.selected.clone().ok_or(LedgerError::NoBudgetSelected)?;
        if !amount.is_finite() {
            return Err(LedgerError::InvalidInput(
                "expense amount must be a finite number".into(),
            ));
        }
        if amount <= 0.0 {
            return Err(LedgerError::InvalidInput(
                "expense amount must be greater than 0".into(),
            ));
        }
        let budget = self
            .budgets
            .iter_mut()
            .find(|budget| budget.name == selected)
            .ok_or(LedgerError::BudgetNotFound(selected))?;
        budget.balance -= amount;
        budget
            .transactions
            .push(Transaction::new(amount, description));
        debug!("expense of {} recorded against `{}`", amount, budget.name);
        Ok(budget)
    }

    /// Transaction log of the selected budget, oldest first.
    pub fn transactions(&self) -> Result<&[Transaction], LedgerError> {
        let selected = self
            .selected
            .as_deref()
            .ok_or(LedgerError::NoBudgetSelected)?;
        let budget = self
            .find(selected)
            .ok_or_else(|| LedgerError::BudgetNotFound(selected.to_string()))?;
        Ok(&budget.transactions)
    }

    /// Name and balance pairs in creation order.
    pub fn list_budgets(&self) -> Vec<(String, f64)> {
        self.budgets
            .iter()
            .map(|budget| (budget.name.clone(), budget.balance))
            .collect()
    }

    pub fn get_balance(&self, name: &str) -> Result<f64, LedgerError> {
        let name = name.trim();
        self.find(name)
            .map(|budget| budget.balance)
            .ok_or_else(|| LedgerError::BudgetNotFound(name.to_string()))
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn selected_budget(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Budget> {
        self.budgets.iter().find(|budget| budget.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.budgets.iter().position(|budget| budget.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimals_and_whitespace() {
        assert_eq!(parse_amount("42").unwrap(), 42.0);
        assert_eq!(parse_amount(" 19.99 ").unwrap(), 19.99);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12,50").is_err());
        assert!(parse_amount("nan").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn create_trims_and_selects() {
        let mut manager = LedgerManager::new();
        manager.create_budget("  Food  ", 100.0).unwrap();
        assert_eq!(manager.selected_budget(), Some("Food"));
        assert_eq!(manager.get_balance("Food").unwrap(), 100.0);
    }

    #[test]
    fn create_rejects_blank_names() {
        let mut manager = LedgerManager::new();
        assert!(manager.create_budget("   ", 100.0).is_err());
        assert!(manager.is_empty());
    }
}
