use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use eqsheet_core::models::artifact::ArtifactKind;
use eqsheet_core::paths;

use crate::error::AppError;
use crate::state::AppState;

/// Serve a rendered artifact of a previous run: PDFs inline, DOCX as an
/// attachment.
pub async fn get_artifact(
    State(state): State<AppState>,
    Path((id, kind)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind: ArtifactKind = kind
        .parse()
        .map_err(|e: eqsheet_core::error::CoreError| AppError::BadRequest(e.to_string()))?;

    let path = paths::artifact(&paths::run_dir(&state.work_dir, id), kind);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("no {kind} artifact for run {id}")))?;

    let disposition = match kind {
        ArtifactKind::Pdf => format!("inline; filename=\"{}\"", kind.download_name()),
        ArtifactKind::Docx => format!("attachment; filename=\"{}\"", kind.download_name()),
    };

    Ok((
        [
            (header::CONTENT_TYPE, kind.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
