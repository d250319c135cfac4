use std::path::PathBuf;
use std::sync::Arc;

use eqsheet_export::job::Renderer;

use crate::config::ServerConfig;
use crate::pages::Pages;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
    pub pages: Arc<Pages>,
    pub work_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, tera::Error> {
        let renderer = Renderer::new(
            config.pdflatex.clone(),
            config.pandoc.clone(),
            config.work_dir.clone(),
        )
        .with_keep_runs(config.keep_runs);
        Ok(Self {
            renderer: Arc::new(renderer),
            pages: Arc::new(Pages::new()?),
            work_dir: config.work_dir.clone(),
        })
    }
}
