use eqsheet_core::models::category::EquationCategory;

use crate::Formula;
use crate::columns::{CASE, ColumnSpec, param};

/// Mass–energy: `E = m · c^n`, with the exponent taken from the sheet.
pub struct Energy;

static COLUMNS: [ColumnSpec; 3] = [
    CASE,
    ColumnSpec::new("Masa (m)", &["Mass"]),
    ColumnSpec::new("Exponente (n)", &["Exponent"]),
];

impl Formula for Energy {
    fn category(&self) -> EquationCategory {
        EquationCategory::Energy
    }

    fn columns(&self) -> &[ColumnSpec] {
        &COLUMNS
    }

    fn parameter_labels(&self) -> &[&'static str] {
        &["Parámetro 1", "Parámetro 2"]
    }

    fn boxed(&self, params: &[String]) -> String {
        let mass = param(params, 0);
        let exponent = param(params, 1);
        format!(r"\boxed{{E = {mass} \cdot c^{{{exponent}}}}}")
    }
}
