use axum::Json;
use serde::Serialize;

use eqsheet_core::models::category::EquationCategory;
use eqsheet_formulas::all_formulas;
use eqsheet_formulas::columns::ColumnSpec;

#[derive(Serialize)]
pub struct CategorySummary {
    id: &'static str,
    label: &'static str,
    category: EquationCategory,
    columns: Vec<ColumnSpec>,
}

/// Every supported category with the sheet columns it expects.
pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    let categories = all_formulas()
        .iter()
        .map(|f| {
            let category = f.category();
            CategorySummary {
                id: category.id(),
                label: category.label(),
                category,
                columns: f.columns().to_vec(),
            }
        })
        .collect();
    Json(categories)
}
