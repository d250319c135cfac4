use std::path::Path;

use eqsheet_core::models::artifact::{ArtifactKind, RenderedArtifact};
use eqsheet_core::paths;

use crate::error::ExportError;
use crate::tool::{self, ToolCommand};

/// Convert `document.tex` in `dir` to DOCX with pandoc and read it back.
///
/// Math is passed through as MathML so the boxed formulas stay editable
/// equations in Word.
pub fn render_docx(pandoc: &ToolCommand, dir: &Path) -> Result<RenderedArtifact, ExportError> {
    let source = paths::document_source_name();
    let output = paths::artifact_name(ArtifactKind::Docx);
    tool::run(pandoc, &[source.as_str(), "-o", output.as_str(), "--mathml"], dir)?;
    tool::read_artifact(dir, ArtifactKind::Docx)
}
