use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown equation category: {0}")]
    UnknownCategory(String),

    #[error("invalid artifact kind: {0}")]
    InvalidArtifactKind(String),
}
