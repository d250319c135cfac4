use std::path::PathBuf;

use thiserror::Error;

use eqsheet_formulas::error::FormulaError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}\n{detail}")]
    ToolFailed {
        tool: String,
        status: String,
        detail: String,
    },

    #[error("empty tool command")]
    EmptyToolCommand,

    #[error("expected output {} was not produced", .path.display())]
    MissingOutput { path: PathBuf },
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
