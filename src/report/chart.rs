use std::path::Path;

use plotters::prelude::*;

use crate::ledger::Budget;
use crate::report::ReportError;

const CHART_SIZE: (u32, u32) = (800, 600);
const CAPTION: &str = "Budget Balances";

/// Renders the balances as a bar chart in an SVG file, one labeled bar per
/// budget. Bars extend below the axis when a balance is negative.
pub fn export_chart(budgets: &[Budget], path: &Path) -> Result<(), ReportError> {
    if budgets.is_empty() {
        return Err(ReportError::Empty);
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let highest = budgets
        .iter()
        .fold(0.0_f64, |acc, budget| acc.max(budget.balance));
    let lowest = budgets
        .iter()
        .fold(0.0_f64, |acc, budget| acc.min(budget.balance));
    let y_top = if highest > 0.0 { highest * 1.1 } else { 1.0 };
    let y_bottom = if lowest < 0.0 { lowest * 1.1 } else { 0.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..budgets.len()).into_segmented(), y_bottom..y_top)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(budgets.len() + 1)
        .x_label_formatter(&|segment| segment_label(budgets, segment))
        .x_desc("Budget")
        .y_desc("Balance")
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(budgets.iter().enumerate().map(|(index, budget)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), budget.balance),
                ],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn segment_label(budgets: &[Budget], segment: &SegmentValue<usize>) -> String {
    let index = match segment {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => *index,
        SegmentValue::Last => return String::new(),
    };
    budgets
        .get(index)
        .map(|budget| budget.name.clone())
        .unwrap_or_default()
}

fn chart_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(err.to_string())
}
