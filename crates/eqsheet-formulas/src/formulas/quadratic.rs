use eqsheet_core::models::category::EquationCategory;

use crate::Formula;
use crate::columns::{CASE, ColumnSpec, param};

/// Quadratic formula with the coefficients plugged in as written.
///
/// The coefficients are substituted textually: a `b` of `-3` yields
/// `--3` and `-3^2`. Roots are never computed.
pub struct Quadratic;

static COLUMNS: [ColumnSpec; 4] = [
    CASE,
    ColumnSpec::new("Coef_a", &["CoefficientA"]),
    ColumnSpec::new("Coef_b", &["CoefficientB"]),
    ColumnSpec::new("Coef_c", &["CoefficientC"]),
];

impl Formula for Quadratic {
    fn category(&self) -> EquationCategory {
        EquationCategory::QuadraticEquation
    }

    fn columns(&self) -> &[ColumnSpec] {
        &COLUMNS
    }

    fn parameter_labels(&self) -> &[&'static str] {
        &["a", "b", "c"]
    }

    fn boxed(&self, params: &[String]) -> String {
        let a = param(params, 0);
        let b = param(params, 1);
        let c = param(params, 2);
        format!(
            r"\boxed{{x = \frac{{-{b} \pm \sqrt{{{b}^2 - 4 \cdot {a} \cdot {c}}}}}{{2 \cdot {a}}}}}"
        )
    }
}
