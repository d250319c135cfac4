use serde::{Deserialize, Serialize};

use super::category::EquationCategory;

/// The LaTeX source produced for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub category: EquationCategory,
    pub row_count: usize,
    pub markup: String,
}
