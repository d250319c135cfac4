//! Work-directory path conventions.
//!
//! Pure path functions — no filesystem access. Every run owns one
//! directory named by its uuid, so concurrent runs never share files.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::artifact::ArtifactKind;

/// Base name shared by the LaTeX source and everything rendered from it.
pub const DOCUMENT_STEM: &str = "document";

/// Extensions of the files `pdflatex` leaves next to its output.
pub const AUXILIARY_EXTENSIONS: [&str; 3] = ["aux", "log", "out"];

pub fn run_dir(root: &Path, id: Uuid) -> PathBuf {
    root.join(id.to_string())
}

pub fn document_source_name() -> String {
    format!("{DOCUMENT_STEM}.tex")
}

pub fn document_source(dir: &Path) -> PathBuf {
    dir.join(document_source_name())
}

pub fn artifact_name(kind: ArtifactKind) -> String {
    format!("{DOCUMENT_STEM}.{}", kind.extension())
}

pub fn artifact(dir: &Path, kind: ArtifactKind) -> PathBuf {
    dir.join(artifact_name(kind))
}

pub fn auxiliary_files(dir: &Path) -> Vec<PathBuf> {
    AUXILIARY_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{DOCUMENT_STEM}.{ext}")))
        .collect()
}
