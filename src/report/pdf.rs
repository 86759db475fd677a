use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::ledger::Budget;
use crate::report::ReportError;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const LEFT_MARGIN_MM: f32 = 25.4;
const TOP_LINE_MM: f32 = 254.0;
const BOTTOM_MARGIN_MM: f32 = 25.4;
const LINE_STEP_MM: f32 = 7.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

/// Writes the balances as a one-column PDF listing, adding pages as needed.
/// No file is created for an empty ledger.
pub fn export_pdf(budgets: &[Budget], path: &Path) -> Result<(), ReportError> {
    if budgets.is_empty() {
        return Err(ReportError::Empty);
    }

    let (doc, page, layer) = PdfDocument::new(
        "Budget Balances",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let mut y = TOP_LINE_MM;

    layer_ref.use_text("Budget Balances:", TITLE_SIZE, Mm(LEFT_MARGIN_MM), Mm(y), &font);
    y -= LINE_STEP_MM;
    layer_ref.use_text("----------------", BODY_SIZE, Mm(LEFT_MARGIN_MM), Mm(y), &font);
    y -= LINE_STEP_MM;

    for budget in budgets {
        if y < BOTTOM_MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_LINE_MM;
        }
        let line = format!("{}: ${}", budget.name, budget.balance);
        layer_ref.use_text(line, BODY_SIZE, Mm(LEFT_MARGIN_MM), Mm(y), &font);
        y -= LINE_STEP_MM;
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|err| ReportError::Pdf(err.to_string()))?;
    Ok(())
}
