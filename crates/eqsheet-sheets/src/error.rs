use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("unsupported spreadsheet '{file_name}' (allowed extensions: {allowed})")]
    UnsupportedExtension { file_name: String, allowed: String },

    #[error("could not open spreadsheet: {0}")]
    Open(String),

    #[error("worksheet named '{sheet}' not found (available: {available})")]
    SheetNotFound { sheet: String, available: String },

    #[error("could not read worksheet '{sheet}': {message}")]
    Read { sheet: String, message: String },
}
