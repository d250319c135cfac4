use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four formula families a document can be generated for.
///
/// The label doubles as the name of the spreadsheet sheet the rows are
/// read from, so it must match the uploaded workbook exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationCategory {
    Energy,
    HookesLaw,
    QuadraticEquation,
    OhmsLaw,
}

impl EquationCategory {
    /// All categories, in the order they are offered in the form.
    pub const ALL: [EquationCategory; 4] = [
        EquationCategory::Energy,
        EquationCategory::HookesLaw,
        EquationCategory::QuadraticEquation,
        EquationCategory::OhmsLaw,
    ];

    /// User-facing label, also the expected sheet name.
    pub fn label(&self) -> &'static str {
        match self {
            EquationCategory::Energy => "Energía",
            EquationCategory::HookesLaw => "Ley de Hooke",
            EquationCategory::QuadraticEquation => "Ecuación cuadrática",
            EquationCategory::OhmsLaw => "Ley de Ohm",
        }
    }

    /// Stable identifier used in form values and JSON.
    pub fn id(&self) -> &'static str {
        match self {
            EquationCategory::Energy => "energy",
            EquationCategory::HookesLaw => "hookes_law",
            EquationCategory::QuadraticEquation => "quadratic_equation",
            EquationCategory::OhmsLaw => "ohms_law",
        }
    }
}

impl fmt::Display for EquationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquationCategory {
    type Err = CoreError;

    /// Accepts either the label or the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EquationCategory::ALL
            .into_iter()
            .find(|c| c.label() == s || c.id() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Which render artifacts a run should produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub pdf: bool,
    pub word: bool,
}

impl ExportOptions {
    pub fn any(&self) -> bool {
        self.pdf || self.word
    }
}
