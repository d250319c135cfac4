use eqsheet_core::models::category::EquationCategory;

use crate::Formula;
use crate::columns::{CASE, ColumnSpec, param};

/// Hooke's law: `F = k · x`.
pub struct HookesLaw;

static COLUMNS: [ColumnSpec; 3] = [
    CASE,
    ColumnSpec::new("Constante_k", &["SpringConstant"]),
    ColumnSpec::new("Desplazamiento_x", &["Displacement"]),
];

impl Formula for HookesLaw {
    fn category(&self) -> EquationCategory {
        EquationCategory::HookesLaw
    }

    fn columns(&self) -> &[ColumnSpec] {
        &COLUMNS
    }

    fn parameter_labels(&self) -> &[&'static str] {
        &["Parámetro 1", "Parámetro 2"]
    }

    fn boxed(&self, params: &[String]) -> String {
        let k = param(params, 0);
        let x = param(params, 1);
        format!(r"\boxed{{F = {k} \cdot {x}}}")
    }
}
