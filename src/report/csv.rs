use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ledger::Budget;
use crate::report::ReportError;

const HEADER: [&str; 2] = ["Budget", "Balance"];

/// Writes the balances table to any writer, one row per budget in creation
/// order. Balances keep their shortest decimal form, so `100.0` becomes `100`.
pub fn write_csv<W: Write>(budgets: &[Budget], writer: W) -> Result<(), ReportError> {
    if budgets.is_empty() {
        return Err(ReportError::Empty);
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for budget in budgets {
        let balance = budget.balance.to_string();
        csv_writer.write_record([budget.name.as_str(), balance.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Exports the balances table to a CSV file. No file is created for an empty
/// ledger.
pub fn export_csv(budgets: &[Budget], path: &Path) -> Result<(), ReportError> {
    if budgets.is_empty() {
        return Err(ReportError::Empty);
    }
    let file = File::create(path)?;
    write_csv(budgets, file)
}
