use tallybook::ledger::LedgerManager;

/// Builds a manager seeded with the given budgets. The last one created ends
/// up selected.
pub fn seeded_manager(budgets: &[(&str, f64)]) -> LedgerManager {
    let mut manager = LedgerManager::new();
    for (name, amount) in budgets {
        manager
            .create_budget(name, *amount)
            .expect("seed budget should be valid");
    }
    manager
}
