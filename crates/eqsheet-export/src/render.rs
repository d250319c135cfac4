use serde::Serialize;
use tera::{Context, Tera};

use eqsheet_core::models::category::EquationCategory;
use eqsheet_core::models::document::GeneratedDocument;
use eqsheet_core::models::table::InputTable;
use eqsheet_formulas::formula_for;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "document.tex";
const TEMPLATE: &str = include_str!("../templates/document.tex.tera");

/// Date format used in the title and the closing block.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Serialize)]
struct DocumentContext<'a> {
    date: String,
    category: &'a str,
    column_spec: String,
    header_row: String,
    rows: Vec<String>,
}

/// Render the LaTeX document for `table` under `category`.
///
/// Deterministic for a given table, category and date. Every required
/// column is checked before anything is rendered, so a missing column
/// never produces a partial document.
pub fn generate_document(
    table: &InputTable,
    category: EquationCategory,
    date: jiff::civil::Date,
) -> Result<GeneratedDocument, ExportError> {
    let formula = formula_for(category);
    let rows = formula.resolve(table)?;

    let context = DocumentContext {
        date: date.strftime(DATE_FORMAT).to_string(),
        category: category.label(),
        column_spec: formula.column_spec(),
        header_row: formula.header_row(),
        rows: rows.iter().map(|row| formula.table_row(row)).collect(),
    };

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    let context = Context::from_serialize(&context)?;
    let markup = tera.render(TEMPLATE_NAME, &context)?;

    Ok(GeneratedDocument {
        category,
        row_count: rows.len(),
        markup,
    })
}
