use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tallybook_cli").unwrap();
    cmd.env("TALLYBOOK_CLI_SCRIPT", "1")
        .env("TALLYBOOK_HOME", home);
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n200\n5\n50\ngroceries\n5\n20\nsnacks\n7\nFood\n8\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Budget `Food` created with initial amount $200"))
        .stdout(contains("New balance: $130"))
        .stdout(contains("Balance of `Food`: $130"))
        .stdout(contains("1. Amount: $50, Description: groceries"))
        .stdout(contains("2. Amount: $20, Description: snacks"))
        .stdout(contains("Exiting the budget manager."));
}

#[test]
fn invalid_choice_gets_a_suggestion() {
    let home = TempDir::new().unwrap();

    cli_command(home.path())
        .write_stdin("creat\n12\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice `creat`"))
        .stdout(contains("Suggestion: `create`?"));
}

#[test]
fn menu_accepts_keywords_as_well_as_numbers() {
    let home = TempDir::new().unwrap();
    let input = "create\nTrip\n300\nbalance\nTrip\nexit\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Budget `Trip` created with initial amount $300"))
        .stdout(contains("Balance of `Trip`: $300"));
}

#[test]
fn delete_reprompts_until_yes_or_no() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n100\n4\nFood\nmaybe\ny\n6\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Please answer y or n, got `maybe`"))
        .stdout(contains("Budget `Food` deleted."))
        .stdout(contains("No budgets found. Please create a budget first."));
}

#[test]
fn declined_delete_keeps_the_budget() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n100\n4\nFood\nn\n6\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."))
        .stdout(contains("Food: $100"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let home = TempDir::new().unwrap();

    cli_command(home.path())
        .write_stdin("1\nFood\n100\n")
        .assert()
        .success()
        .stdout(contains("Budget `Food` created"))
        .stdout(contains("Exiting the budget manager."));
}

#[test]
fn expense_without_selection_prints_a_hint() {
    let home = TempDir::new().unwrap();

    cli_command(home.path())
        .write_stdin("5\n12\n")
        .assert()
        .success()
        .stdout(contains("No budget selected."))
        .stdout(contains("select a budget"));
}

#[test]
fn invalid_amount_aborts_creation() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\nabc\n6\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("`abc` is not a valid amount"))
        .stdout(contains("No budgets found. Please create a budget first."));
}

#[test]
fn zero_amount_is_rejected() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n0\n6\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("initial amount must be greater than 0"))
        .stdout(contains("No budgets found. Please create a budget first."));
}

#[test]
fn duplicate_name_is_rejected() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n100\n1\nFood\n50\n7\nFood\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("budget `Food` already exists"))
        .stdout(contains("Balance of `Food`: $100"));
}

#[test]
fn edit_renames_and_selection_follows() {
    let home = TempDir::new().unwrap();
    let input = "1\nFood\n100\n3\nFood\nGroceries\n\n5\n10\nmilk\n7\nGroceries\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Budget `Food` updated (now `Groceries`)"))
        .stdout(contains("New balance: $90"))
        .stdout(contains("Balance of `Groceries`: $90"));
}

#[test]
fn colliding_rename_is_fully_rejected() {
    let home = TempDir::new().unwrap();
    let input = "1\nA\n100\n1\nB\n200\n3\nB\nA\n500\n7\nB\n12\n";

    cli_command(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("budget `A` already exists"))
        .stdout(contains("Balance of `B`: $200"));
}

#[test]
fn csv_export_through_the_menu_writes_a_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = "1\nFood\n200\n10\nreport\n12\n";

    cli_command(home.path())
        .current_dir(work.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Balances exported to `report.csv`"));

    let text = std::fs::read_to_string(work.path().join("report.csv")).unwrap();
    assert_eq!(text, "Budget,Balance\nFood,200\n");
}

#[test]
fn chart_and_pdf_export_through_the_menu() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = "1\nA\n100\n9\nchart\n11\nsheet\n12\n";

    cli_command(home.path())
        .current_dir(work.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Chart saved to `chart.svg`"))
        .stdout(contains("Balances exported to `sheet.pdf`"));

    assert!(work.path().join("chart.svg").exists());
    assert!(work.path().join("sheet.pdf").exists());

    let pdf_bytes = std::fs::read(work.path().join("sheet.pdf")).unwrap();
    assert!(pdf_bytes.starts_with(b"%PDF"));
}

#[test]
fn export_with_no_budgets_is_refused() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    cli_command(home.path())
        .current_dir(work.path())
        .write_stdin("10\n12\n")
        .assert()
        .success()
        .stdout(contains("No budgets found. Please create a budget first."));

    assert!(std::fs::read_dir(work.path()).unwrap().next().is_none());
}
