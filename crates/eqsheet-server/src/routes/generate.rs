use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use tracing::info;

use eqsheet_core::models::artifact::{ArtifactKind, RenderedArtifact};
use eqsheet_core::models::category::{EquationCategory, ExportOptions};
use eqsheet_export::error::ExportError;
use eqsheet_export::job::RunOutcome;
use eqsheet_sheets::format::SpreadsheetFormat;
use eqsheet_sheets::workbook::read_category_table;

use crate::error::AppError;
use crate::pages::{ArtifactView, FormSelection, ResultView};
use crate::state::AppState;

pub const INPUT_MISSING: &str = "¡Selecciona un archivo Excel válido!";

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// The submitted form. Unchecked checkboxes are simply absent.
struct GenerateForm {
    selection: FormSelection,
    upload: Option<Upload>,
}

/// Handle a form submission and redraw the page with its results.
///
/// Any failure is shown on the page verbatim, with the form keeping the
/// user's selection.
pub async fn generate(State(state): State<AppState>, multipart: Multipart) -> Response {
    let mut selection = FormSelection {
        options: ExportOptions::default(),
        ..FormSelection::default()
    };

    let result = match read_form(multipart, &mut selection).await {
        Ok(form) => run(&state, form).await,
        Err(e) => Err(e),
    };

    let (status, page) = match &result {
        Ok(view) => (
            axum::http::StatusCode::OK,
            state.pages.index(selection, Some(view), None),
        ),
        Err(e) => {
            info!(status = e.status().as_u16(), error = %e, "generation rejected");
            (e.status(), state.pages.index(selection, None, Some(e.message())))
        }
    };

    match page {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

async fn read_form(
    mut multipart: Multipart,
    selection: &mut FormSelection,
) -> Result<GenerateForm, AppError> {
    let mut upload = None;
    let mut category = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    upload = Some(Upload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "category" => {
                let value = field.text().await?;
                let parsed: EquationCategory = value
                    .parse()
                    .map_err(|e: eqsheet_core::error::CoreError| AppError::BadRequest(e.to_string()))?;
                selection.category = parsed;
                category = Some(parsed);
            }
            "export_pdf" => selection.options.pdf = true,
            "export_word" => selection.options.word = true,
            _ => {}
        }
    }

    if category.is_none() {
        return Err(AppError::BadRequest("no equation category selected".to_string()));
    }

    Ok(GenerateForm {
        selection: *selection,
        upload,
    })
}

async fn run(state: &AppState, form: GenerateForm) -> Result<ResultView, AppError> {
    let Some(upload) = form.upload else {
        return Err(AppError::InputMissing(INPUT_MISSING.to_string()));
    };
    SpreadsheetFormat::from_file_name(&upload.file_name)?;

    let FormSelection { category, options } = form.selection;
    let renderer = state.renderer.clone();
    let bytes = upload.bytes;

    let outcome = tokio::task::spawn_blocking(move || -> Result<RunOutcome, AppError> {
        let table = read_category_table(&bytes, category)?;
        let today = jiff::Zoned::now().date();
        Ok(renderer.run(&table, category, options, today)?)
    })
    .await??;

    info!(
        run_id = %outcome.run_id,
        file = %upload.file_name,
        rows = outcome.document.row_count,
        failures = outcome.failures().count(),
        "run finished"
    );

    Ok(result_view(upload.file_name, category, options, outcome))
}

fn result_view(
    file_name: String,
    category: EquationCategory,
    options: ExportOptions,
    outcome: RunOutcome,
) -> ResultView {
    let run_id = outcome.run_id.to_string();
    ResultView {
        pdf: outcome.pdf.map(|r| artifact_view(&run_id, ArtifactKind::Pdf, r)),
        docx: outcome.docx.map(|r| artifact_view(&run_id, ArtifactKind::Docx, r)),
        file_name,
        category: category.label(),
        export_pdf: options.pdf,
        export_word: options.word,
        row_count: outcome.document.row_count,
        markup: outcome.document.markup,
        run_id,
    }
}

fn artifact_view(
    run_id: &str,
    kind: ArtifactKind,
    result: Result<RenderedArtifact, ExportError>,
) -> ArtifactView {
    match result {
        Ok(artifact) => ArtifactView {
            download_url: Some(format!("/runs/{run_id}/{kind}")),
            data_url: (kind == ArtifactKind::Pdf).then(|| {
                format!(
                    "data:{};base64,{}",
                    kind.content_type(),
                    BASE64.encode(&artifact.bytes)
                )
            }),
            download_name: kind.download_name(),
            error: None,
        },
        Err(e) => ArtifactView {
            download_url: None,
            data_url: None,
            download_name: kind.download_name(),
            error: Some(e.to_string()),
        },
    }
}
