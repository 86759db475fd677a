mod common;

use common::seeded_manager;
use tallybook::ledger::LedgerManager;
use tallybook::report::{chart, csv, pdf, ReportError};

#[test]
fn csv_writes_header_and_one_row_per_budget() {
    let manager = seeded_manager(&[("A", 100.0)]);
    let mut buffer = Vec::new();
    csv::write_csv(manager.budgets(), &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Budget,Balance"));
    assert_eq!(lines.next(), Some("A,100"));
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_keeps_creation_order_and_decimals() {
    let mut manager = seeded_manager(&[("Rent", 1200.0), ("Fun", 99.5)]);
    manager.select_budget("Rent").unwrap();
    manager.add_expense(200.5, "deposit").unwrap();

    let mut buffer = Vec::new();
    csv::write_csv(manager.budgets(), &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Budget,Balance", "Rent,999.5", "Fun,99.5"]);
}

#[test]
fn csv_quotes_names_containing_commas() {
    let manager = seeded_manager(&[("Rainy, day", 10.0)]);
    let mut buffer = Vec::new();
    csv::write_csv(manager.budgets(), &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("\"Rainy, day\",10"));
}

#[test]
fn empty_ledger_refuses_csv_export() {
    let manager = LedgerManager::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.csv");

    let err = csv::export_csv(manager.budgets(), &path).expect_err("empty export must fail");
    assert!(matches!(err, ReportError::Empty));
    assert!(!path.exists());
}

#[test]
fn csv_export_writes_a_file() {
    let manager = seeded_manager(&[("Food", 130.0)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.csv");

    csv::export_csv(manager.budgets(), &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Budget,Balance\nFood,130\n");
}

#[test]
fn pdf_export_writes_a_document() {
    let manager = seeded_manager(&[("Food", 130.0), ("Trip", 80.0)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.pdf");

    pdf::export_pdf(manager.budgets(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_export_survives_many_budgets() {
    let mut manager = LedgerManager::new();
    for index in 0..80 {
        manager
            .create_budget(&format!("Budget {index}"), 10.0 + index as f64)
            .unwrap();
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.pdf");

    pdf::export_pdf(manager.budgets(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn empty_ledger_refuses_pdf_export() {
    let manager = LedgerManager::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.pdf");

    let err = pdf::export_pdf(manager.budgets(), &path).expect_err("empty export must fail");
    assert!(matches!(err, ReportError::Empty));
    assert!(!path.exists());
}

#[test]
fn chart_export_writes_labeled_svg() {
    let manager = seeded_manager(&[("Food", 130.0), ("Utilities", 80.0)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.svg");

    chart::export_chart(manager.budgets(), &path).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Budget Balances"));
    assert!(svg.contains("Food"));
    assert!(svg.contains("Utilities"));
}

#[test]
fn chart_export_handles_negative_balances() {
    let mut manager = seeded_manager(&[("Wallet", 50.0)]);
    manager.add_expense(80.0, "overdraft").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.svg");
    chart::export_chart(manager.budgets(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn empty_ledger_refuses_chart_export() {
    let manager = LedgerManager::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balances.svg");

    let err = chart::export_chart(manager.budgets(), &path).expect_err("empty export must fail");
    assert!(matches!(err, ReportError::Empty));
    assert!(!path.exists());
}
