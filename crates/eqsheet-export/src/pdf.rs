use std::path::Path;

use eqsheet_core::models::artifact::{ArtifactKind, RenderedArtifact};
use eqsheet_core::paths;

use crate::error::ExportError;
use crate::tool::{self, ToolCommand};

/// Compile `document.tex` in `dir` with a LaTeX engine and read back the PDF.
///
/// Runs non-interactively and stops at the first error, so a broken
/// document fails instead of waiting for input. Auxiliary files are left
/// in place; see [`crate::cleanup::remove_auxiliary_files`].
pub fn render_pdf(pdflatex: &ToolCommand, dir: &Path) -> Result<RenderedArtifact, ExportError> {
    let source = paths::document_source_name();
    tool::run(
        pdflatex,
        &["-interaction=nonstopmode", "-halt-on-error", source.as_str()],
        dir,
    )?;
    tool::read_artifact(dir, ArtifactKind::Pdf)
}
