//! eqsheet-formulas
//!
//! Formula definitions for each equation category. Pure data and string
//! formatting — no spreadsheet or process dependency. Each formula
//! declares the columns it reads and how one row is typeset.

pub mod columns;
pub mod error;
pub mod formulas;

use eqsheet_core::models::category::EquationCategory;
use eqsheet_core::models::table::InputTable;

use columns::{ColumnSpec, FormulaRow, escape_text};
use error::FormulaError;

/// Trait implemented by each equation category.
pub trait Formula: Send + Sync {
    fn category(&self) -> EquationCategory;

    /// Columns read from the sheet. The first one is always the case label.
    fn columns(&self) -> &[ColumnSpec];

    /// Table header text for the parameter columns.
    fn parameter_labels(&self) -> &[&'static str];

    /// The boxed formula with `params` substituted as literal text.
    ///
    /// `params` holds one entry per non-label column, in declaration order.
    fn boxed(&self, params: &[String]) -> String;

    /// Extract the rows this formula needs from `table`.
    ///
    /// Every required column is checked before any row is read, so a
    /// missing column never yields a partial result.
    fn resolve(&self, table: &InputTable) -> Result<Vec<FormulaRow>, FormulaError> {
        let mut headers = Vec::with_capacity(self.columns().len());
        for spec in self.columns() {
            let header = spec.find_in(table).ok_or_else(|| FormulaError::MissingColumn {
                sheet: self.category().label().to_string(),
                column: spec.header.to_string(),
                aliases: spec.aliases.join(", "),
            })?;
            headers.push(header);
        }

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let mut values = headers
                    .iter()
                    .map(|h| row.get(*h).map(|v| v.to_string()).unwrap_or_default());
                let case = values.next().unwrap_or_default();
                FormulaRow {
                    case,
                    params: values.collect(),
                }
            })
            .collect();
        Ok(rows)
    }

    /// The `tabular` column specification, e.g. `l c c >{...}p{5cm}`.
    fn column_spec(&self) -> String {
        let mut spec = String::from("l ");
        for _ in self.parameter_labels() {
            spec.push_str("c ");
        }
        spec.push_str(r">{\centering\arraybackslash}p{5cm}");
        spec
    }

    /// The bold header row of the results table.
    fn header_row(&self) -> String {
        let mut cells = vec![r"\textbf{Caso}".to_string()];
        cells.extend(
            self.parameter_labels()
                .iter()
                .map(|label| format!(r"\textbf{{{label}}}")),
        );
        cells.push(r"\textbf{Ecuación}".to_string());
        format!(r"{} \\", cells.join(" & "))
    }

    /// One table row: case label, each parameter in math mode, then the
    /// boxed formula.
    fn table_row(&self, row: &FormulaRow) -> String {
        let mut cells = vec![escape_text(&row.case)];
        cells.extend(row.params.iter().map(|p| format!("${p}$")));
        cells.push(format!("${}$", self.boxed(&row.params)));
        format!(r"{} \\", cells.join(" & "))
    }
}

/// Return all registered formulas.
pub fn all_formulas() -> Vec<Box<dyn Formula>> {
    vec![
        Box::new(formulas::energy::Energy),
        Box::new(formulas::hookes_law::HookesLaw),
        Box::new(formulas::quadratic::Quadratic),
        Box::new(formulas::ohms_law::OhmsLaw),
    ]
}

/// Look up the formula for a category.
pub fn formula_for(category: EquationCategory) -> Box<dyn Formula> {
    match category {
        EquationCategory::Energy => Box::new(formulas::energy::Energy),
        EquationCategory::HookesLaw => Box::new(formulas::hookes_law::HookesLaw),
        EquationCategory::QuadraticEquation => Box::new(formulas::quadratic::Quadratic),
        EquationCategory::OhmsLaw => Box::new(formulas::ohms_law::OhmsLaw),
    }
}
