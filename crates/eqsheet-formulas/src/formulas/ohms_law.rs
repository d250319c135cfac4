use eqsheet_core::models::category::EquationCategory;

use crate::Formula;
use crate::columns::{CASE, ColumnSpec, param};

/// Ohm's law solved for resistance: `R = V / I`, as a fraction.
pub struct OhmsLaw;

static COLUMNS: [ColumnSpec; 3] = [
    CASE,
    ColumnSpec::new("Voltaje_V", &["Voltage"]),
    ColumnSpec::new("Corriente_I", &["Current"]),
];

impl Formula for OhmsLaw {
    fn category(&self) -> EquationCategory {
        EquationCategory::OhmsLaw
    }

    fn columns(&self) -> &[ColumnSpec] {
        &COLUMNS
    }

    fn parameter_labels(&self) -> &[&'static str] {
        &["Parámetro 1", "Parámetro 2"]
    }

    fn boxed(&self, params: &[String]) -> String {
        let voltage = param(params, 0);
        let current = param(params, 1);
        format!(r"\boxed{{R = \frac{{{voltage}}}{{{current}}}}}")
    }
}
