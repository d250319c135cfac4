use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("missing column '{column}' in sheet '{sheet}' (also accepted: {aliases})")]
    MissingColumn {
        sheet: String,
        column: String,
        aliases: String,
    },
}
