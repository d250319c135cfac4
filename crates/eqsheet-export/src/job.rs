use std::path::PathBuf;

use tracing::{info, warn};
use uuid::Uuid;

use eqsheet_core::models::artifact::RenderedArtifact;
use eqsheet_core::models::category::{EquationCategory, ExportOptions};
use eqsheet_core::models::document::GeneratedDocument;
use eqsheet_core::models::table::InputTable;
use eqsheet_core::paths;

use crate::cleanup::{prune_runs, remove_auxiliary_files};
use crate::docx::render_docx;
use crate::error::ExportError;
use crate::pdf::render_pdf;
use crate::render::generate_document;
use crate::tool::ToolCommand;

/// Runs the generate → write → render pipeline. Each run gets its own
/// directory under `work_root`.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub pdflatex: ToolCommand,
    pub pandoc: ToolCommand,
    pub work_root: PathBuf,
    /// How many run directories survive a run, the new one included.
    /// `None` keeps all of them.
    pub keep_runs: Option<usize>,
}

/// Everything one run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub run_id: Uuid,
    pub run_dir: PathBuf,
    pub source_path: PathBuf,
    pub document: GeneratedDocument,
    /// `None` when PDF export was not requested.
    pub pdf: Option<Result<RenderedArtifact, ExportError>>,
    /// `None` when Word export was not requested.
    pub docx: Option<Result<RenderedArtifact, ExportError>>,
}

impl RunOutcome {
    /// Render failures, PDF first.
    pub fn failures(&self) -> impl Iterator<Item = &ExportError> {
        [self.pdf.as_ref(), self.docx.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(|r| r.as_ref().err())
    }
}

impl Renderer {
    pub fn new(pdflatex: ToolCommand, pandoc: ToolCommand, work_root: impl Into<PathBuf>) -> Self {
        Self {
            pdflatex,
            pandoc,
            work_root: work_root.into(),
            keep_runs: None,
        }
    }

    pub fn with_keep_runs(mut self, keep_runs: Option<usize>) -> Self {
        self.keep_runs = keep_runs;
        self
    }

    /// Generate the document and render the requested artifacts.
    ///
    /// Generation errors abort before anything touches the filesystem.
    /// After that, PDF is attempted before DOCX and a failure in one does
    /// not stop the other; each result is reported in the outcome. Once
    /// the new run is complete, older runs beyond `keep_runs` are deleted.
    pub fn run(
        &self,
        table: &InputTable,
        category: EquationCategory,
        options: ExportOptions,
        date: jiff::civil::Date,
    ) -> Result<RunOutcome, ExportError> {
        let document = generate_document(table, category, date)?;

        let run_id = Uuid::new_v4();
        let run_dir = paths::run_dir(&self.work_root, run_id);
        std::fs::create_dir_all(&run_dir)?;
        let source_path = paths::document_source(&run_dir);
        if let Err(e) = std::fs::write(&source_path, &document.markup) {
            if let Err(cleanup) = std::fs::remove_dir_all(&run_dir) {
                warn!(run_id = %run_id, error = %cleanup, "could not remove incomplete run");
            }
            return Err(e.into());
        }

        info!(
            run_id = %run_id,
            category = category.label(),
            rows = document.row_count,
            pdf = options.pdf,
            word = options.word,
            "document generated"
        );

        let pdf = options.pdf.then(|| {
            let result = render_pdf(&self.pdflatex, &run_dir);
            let removed = remove_auxiliary_files(&run_dir);
            if let Err(e) = &result {
                warn!(run_id = %run_id, error = %e, "PDF render failed");
            }
            info!(run_id = %run_id, removed, "auxiliary files cleaned up");
            result
        });

        let docx = options.word.then(|| {
            let result = render_docx(&self.pandoc, &run_dir);
            if let Err(e) = &result {
                warn!(run_id = %run_id, error = %e, "DOCX render failed");
            }
            result
        });

        if let Some(keep) = self.keep_runs {
            match prune_runs(&self.work_root, keep.max(1)) {
                Ok(0) => {}
                Ok(removed) => info!(removed, keep, "old runs pruned"),
                Err(e) => warn!(error = %e, "could not prune old runs"),
            }
        }

        Ok(RunOutcome {
            run_id,
            run_dir,
            source_path,
            document,
            pdf,
            docx,
        })
    }
}
