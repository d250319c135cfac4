//! Router tests driven through `tower::ServiceExt::oneshot`. The renderers
//! point at programs that do not exist, so only runs without exports
//! succeed end to end.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use eqsheet_export::tool::ToolCommand;
use eqsheet_server::config::{LogFormat, ServerConfig};
use eqsheet_server::state::AppState;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "eqsheet-test-boundary";

fn test_app(work: &TempDir) -> Router {
    let config = ServerConfig {
        addr: "127.0.0.1:0".to_string(),
        work_dir: work.path().to_path_buf(),
        pdflatex: ToolCommand::new("/nonexistent/pdflatex"),
        pandoc: ToolCommand::new("/nonexistent/pandoc"),
        max_upload_bytes: 1024 * 1024,
        keep_runs: Some(5),
        log_format: LogFormat::Text,
    };
    let state = AppState::new(&config).unwrap();
    eqsheet_server::app(state, config.max_upload_bytes)
}

fn ohm_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Ley de Ohm").unwrap();
    sheet.write_string(0, 0, "Case").unwrap();
    sheet.write_string(0, 1, "Voltage").unwrap();
    sheet.write_string(0, 2, "Current").unwrap();
    sheet.write_string(1, 0, "A").unwrap();
    sheet.write_number(1, 1, 10).unwrap();
    sheet.write_number(1, 2, 2).unwrap();
    workbook.save_to_buffer().unwrap()
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_form(app: Router, parts: &[Part<'_>]) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart(parts)))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn form_lists_the_four_categories() {
    let work = TempDir::new().unwrap();
    let (status, body) = get(test_app(&work), "/").await;

    assert_eq!(status, StatusCode::OK);
    for label in ["Energía", "Ley de Hooke", "Ecuación cuadrática", "Ley de Ohm"] {
        assert!(body.contains(label), "missing {label}");
    }
    assert!(body.contains(r#"accept=".xlsx,.xls""#));
    assert!(body.contains(r#"name="export_pdf" checked"#));
    assert!(body.contains(r#"name="export_word" checked"#));
    assert!(body.contains("Generar Documento"));
}

#[tokio::test]
async fn health_reports_ok() {
    let work = TempDir::new().unwrap();
    let (status, body) = get(test_app(&work), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn categories_list_required_columns() {
    let work = TempDir::new().unwrap();
    let (status, body) = get(test_app(&work), "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 4);

    let ohm = categories
        .iter()
        .find(|c| c["id"] == "ohms_law")
        .unwrap();
    assert_eq!(ohm["label"], "Ley de Ohm");
    assert_eq!(ohm["columns"][1]["header"], "Voltaje_V");
    assert_eq!(ohm["columns"][1]["aliases"][0], "Voltage");
}

#[tokio::test]
async fn missing_file_is_reported_before_any_work() {
    let work = TempDir::new().unwrap();
    let (status, body) = post_form(
        test_app(&work),
        &[Part::Text("category", "ohms_law"), Part::Text("export_pdf", "on")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Selecciona un archivo Excel válido"));
    assert!(std::fs::read_dir(work.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn generation_without_exports_shows_markup() {
    let work = TempDir::new().unwrap();
    let workbook = ohm_workbook();
    let (status, body) = post_form(
        test_app(&work),
        &[
            Part::File("file", "datos.xlsx", &workbook),
            Part::Text("category", "ohms_law"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body.contains("Datos leídos correctamente del Excel (1 filas)"));
    assert!(body.contains(r"\boxed{R = \frac{10}{2}}"));
    assert!(!body.contains("<iframe"));
    assert!(!body.contains("Descargar Word"));
    assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn renderer_failures_are_shown_per_artifact() {
    let work = TempDir::new().unwrap();
    let workbook = ohm_workbook();
    let (status, body) = post_form(
        test_app(&work),
        &[
            Part::File("file", "datos.xlsx", &workbook),
            Part::Text("category", "Ley de Ohm"),
            Part::Text("export_pdf", "on"),
            Part::Text("export_word", "on"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ocurrió un error al generar el PDF"));
    assert!(body.contains("Ocurrió un error al generar el documento Word"));
    assert!(body.contains("failed to launch"));
}

#[tokio::test]
async fn wrong_sheet_is_a_sheet_error() {
    let work = TempDir::new().unwrap();
    let workbook = ohm_workbook();
    let (status, body) = post_form(
        test_app(&work),
        &[
            Part::File("file", "datos.xlsx", &workbook),
            Part::Text("category", "energy"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Ocurrió un error"));
    assert!(body.contains("not found"));
    // The form keeps the selected category.
    assert!(body.contains(r#"value="energy" selected"#));
}

#[tokio::test]
async fn disallowed_extension_is_rejected() {
    let work = TempDir::new().unwrap();
    let (status, body) = post_form(
        test_app(&work),
        &[
            Part::File("file", "datos.csv", b"Caso,Voltaje_V\nA,10\n"),
            Part::Text("category", "ohms_law"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("unsupported spreadsheet"));
}

#[tokio::test]
async fn artifact_route_validates_kind_and_existence() {
    let work = TempDir::new().unwrap();
    let id = uuid::Uuid::new_v4();

    let (status, _) = get(test_app(&work), &format!("/runs/{id}/pdf")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(test_app(&work), &format!("/runs/{id}/tex")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn artifact_route_serves_docx_as_attachment() {
    let work = TempDir::new().unwrap();
    let id = uuid::Uuid::new_v4();
    let dir = work.path().join(id.to_string());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("document.docx"), b"PK docx").unwrap();

    let request = Request::builder()
        .uri(format!("/runs/{id}/docx"))
        .body(Body::empty())
        .unwrap();
    let response = test_app(&work).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"documento_final.docx\""
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"PK docx");
}
