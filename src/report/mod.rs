//! Report exporters for budget balances: CSV, PDF, and an SVG bar chart.

pub mod chart;
pub mod csv;
pub mod pdf;

use thiserror::Error;

/// Failures shared by the report exporters.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No budgets to export")]
    Empty,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("PDF error: {0}")]
    Pdf(String),
}
