//! One handler per menu action. Each prompts for its fields and reports the
//! ledger's answer.

use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::menu::MenuAction;
use crate::cli::output;
use crate::cli::prompts;
use crate::errors::LedgerError;
use crate::ledger::{BudgetEdit, DeleteOutcome};
use crate::report::{chart, csv, pdf, ReportError};

pub(crate) fn dispatch(context: &mut ShellContext, action: MenuAction) -> CommandResult {
    match action {
        MenuAction::CreateBudget => create_budget(context),
        MenuAction::SelectBudget => select_budget(context),
        MenuAction::EditBudget => edit_budget(context),
        MenuAction::DeleteBudget => delete_budget(context),
        MenuAction::AddExpense => add_expense(context),
        MenuAction::ListBudgets => list_budgets(context),
        MenuAction::GetBalance => get_balance(context),
        MenuAction::ListTransactions => list_transactions(context),
        MenuAction::GenerateChart => generate_chart(context),
        MenuAction::ExportCsv => export_csv(context),
        MenuAction::ExportPdf => export_pdf(context),
        MenuAction::Exit => Err(CommandError::ExitRequested),
    }
}

fn create_budget(context: &mut ShellContext) -> CommandResult {
    let name = prompts::text(context, "Budget name", false)?;
    let amount = prompts::amount(context, "Initial amount")?;
    context.manager.create_budget(&name, amount)?;
    output::success(format!(
        "Budget `{name}` created with initial amount {}.",
        context.format_amount(amount)
    ));
    Ok(())
}

fn select_budget(context: &mut ShellContext) -> CommandResult {
    let name = prompts::text(context, "Budget to select", false)?;
    context.manager.select_budget(&name)?;
    output::success(format!("Budget `{name}` is now selected."));
    Ok(())
}

fn edit_budget(context: &mut ShellContext) -> CommandResult {
    let name = prompts::text(context, "Budget to edit", false)?;
    let current = context.manager.get_balance(&name)?;
    output::info(format!(
        "Editing `{name}` (current balance {}).",
        context.format_amount(current)
    ));

    let rename = prompts::text(context, "New name (blank keeps current)", true)?;
    let balance = prompts::optional_amount(context, "New amount (blank keeps current)")?;

    let edit = BudgetEdit {
        rename: (!rename.is_empty()).then_some(rename),
        balance,
    };
    if edit.rename.is_none() && edit.balance.is_none() {
        output::info("No changes requested.");
        return Ok(());
    }
    let renamed = edit.rename.clone();
    context.manager.edit_budget(&name, edit)?;
    match renamed {
        Some(new_name) => output::success(format!("Budget `{name}` updated (now `{new_name}`).")),
        None => output::success(format!("Budget `{name}` updated.")),
    }
    Ok(())
}

fn delete_budget(context: &mut ShellContext) -> CommandResult {
    let name = prompts::text(context, "Budget to delete", false)?;
    let balance = context.manager.get_balance(&name)?;
    let question = format!(
        "Delete budget `{name}` with balance {}?",
        context.format_amount(balance)
    );
    let confirmed = prompts::confirm(context, &question, false)?;
    match context.manager.delete_budget(&name, confirmed)? {
        DeleteOutcome::Deleted => output::success(format!("Budget `{name}` deleted.")),
        DeleteOutcome::Cancelled => output::info("Deletion cancelled."),
    }
    Ok(())
}

fn add_expense(context: &mut ShellContext) -> CommandResult {
    if context.manager.selected_budget().is_none() {
        return Err(LedgerError::NoBudgetSelected.into());
    }
    let amount = prompts::amount(context, "Expense amount")?;
    let description = prompts::text(context, "Expense description", true)?;
    let (budget_name, new_balance) = {
        let budget = context.manager.add_expense(amount, &description)?;
        (budget.name.clone(), budget.balance)
    };
    output::success(format!(
        "Expense of {} added to `{budget_name}` ({description}).",
        context.format_amount(amount)
    ));
    output::info(format!(
        "New balance: {}.",
        context.format_amount(new_balance)
    ));
    Ok(())
}

fn list_budgets(context: &mut ShellContext) -> CommandResult {
    let entries = context.manager.list_budgets();
    if entries.is_empty() {
        output::warning("No budgets found. Please create a budget first.");
        return Ok(());
    }
    output::section("Available budgets");
    for (name, balance) in entries {
        output::info(format!("{name}: {}", context.format_amount(balance)));
    }
    Ok(())
}

fn get_balance(context: &mut ShellContext) -> CommandResult {
    let name = prompts::text(context, "Budget name", false)?;
    let balance = context.manager.get_balance(&name)?;
    output::info(format!(
        "Balance of `{name}`: {}.",
        context.format_amount(balance)
    ));
    Ok(())
}

fn list_transactions(context: &mut ShellContext) -> CommandResult {
    let name = context
        .manager
        .selected_budget()
        .ok_or(LedgerError::NoBudgetSelected)?
        .to_string();
    let transactions = context.manager.transactions()?;
    output::section(format!("Transactions for `{name}`"));
    if transactions.is_empty() {
        output::info("No expenses recorded yet.");
        return Ok(());
    }
    for (index, transaction) in transactions.iter().enumerate() {
        output::info(format!(
            "{}. Amount: {}, Description: {}",
            index + 1,
            context.format_amount(transaction.amount),
            transaction.description
        ));
    }
    Ok(())
}

fn generate_chart(context: &mut ShellContext) -> CommandResult {
    let path = export_target(context, "Chart filename", "svg")?;
    chart::export_chart(context.manager.budgets(), &path)?;
    output::success(format!("Chart saved to `{}`.", path.display()));
    Ok(())
}

fn export_csv(context: &mut ShellContext) -> CommandResult {
    let path = export_target(context, "CSV filename", "csv")?;
    csv::export_csv(context.manager.budgets(), &path)?;
    output::success(format!("Balances exported to `{}`.", path.display()));
    Ok(())
}

fn export_pdf(context: &mut ShellContext) -> CommandResult {
    let path = export_target(context, "PDF filename", "pdf")?;
    pdf::export_pdf(context.manager.budgets(), &path)?;
    output::success(format!("Balances exported to `{}`.", path.display()));
    Ok(())
}

/// Resolves the export path: default extension when none is given, and
/// relative names land in the configured export directory when one is set.
fn export_target(
    context: &mut ShellContext,
    label: &str,
    extension: &str,
) -> Result<PathBuf, CommandError> {
    if context.manager.is_empty() {
        return Err(ReportError::Empty.into());
    }
    let raw = prompts::text(context, label, false)?;
    let mut path = PathBuf::from(raw);
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    if path.is_relative() {
        if let Some(dir) = &context.config.export_dir {
            path = dir.join(path);
        }
    }
    Ok(path)
}
