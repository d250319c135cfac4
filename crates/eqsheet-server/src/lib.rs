//! eqsheet-server
//!
//! Browser form for generating equation reports from a spreadsheet.
//! Uploads are turned into LaTeX, rendered to PDF/DOCX by external tools
//! and shown back on the same page.

pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

use config::{LogFormat, ServerConfig};
use state::AppState;

/// Build the router. Request bodies above `max_upload_bytes` are rejected
/// with 413.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::form::show_form))
        .route("/generate", post(routes::generate::generate))
        .route("/runs/{id}/{kind}", get(routes::runs::get_artifact))
        .route("/api/categories", get(routes::categories::list_categories))
        .route("/health", get(routes::health::health_check))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .with_state(state)
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

pub async fn serve(config: ServerConfig) -> eyre::Result<()> {
    tokio::fs::create_dir_all(&config.work_dir).await.map_err(|e| {
        eyre::eyre!(
            "failed to create work directory {}: {e}",
            config.work_dir.display()
        )
    })?;

    if let Some(keep) = config.keep_runs {
        let removed = eqsheet_export::cleanup::prune_runs(&config.work_dir, keep)?;
        tracing::info!(removed, keep, "old runs pruned at startup");
    }

    let state = AppState::new(&config)?;
    let app = app(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        work_dir = %config.work_dir.display(),
        pdflatex = %config.pdflatex,
        pandoc = %config.pandoc,
        "eqsheet server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
