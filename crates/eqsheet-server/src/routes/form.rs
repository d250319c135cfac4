use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::pages::FormSelection;
use crate::state::AppState;

/// The empty form, with both exports checked.
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = state.pages.index(FormSelection::default(), None, None)?;
    Ok(Html(body))
}
