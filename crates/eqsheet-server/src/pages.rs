//! Server-rendered HTML: the form plus, after a submission, its results.

use serde::Serialize;
use tera::{Context, Tera};

use eqsheet_core::models::category::{EquationCategory, ExportOptions};
use eqsheet_sheets::format::SpreadsheetFormat;

const INDEX_NAME: &str = "index.html";
const INDEX: &str = include_str!("../templates/index.html");

pub struct Pages {
    tera: Tera,
}

#[derive(Debug, Serialize)]
struct CategoryOption {
    id: &'static str,
    label: &'static str,
}

/// What the form shows as selected when the page is drawn.
#[derive(Debug, Clone, Copy)]
pub struct FormSelection {
    pub category: EquationCategory,
    pub options: ExportOptions,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self {
            category: EquationCategory::Energy,
            options: ExportOptions {
                pdf: true,
                word: true,
            },
        }
    }
}

/// One requested artifact on the result page.
#[derive(Debug, Serialize)]
pub struct ArtifactView {
    pub download_url: Option<String>,
    /// Inline `data:` URL, only set for PDFs.
    pub data_url: Option<String>,
    pub download_name: &'static str,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultView {
    pub run_id: String,
    pub file_name: String,
    pub category: &'static str,
    pub export_pdf: bool,
    pub export_word: bool,
    pub row_count: usize,
    pub markup: String,
    pub pdf: Option<ArtifactView>,
    pub docx: Option<ArtifactView>,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    accept: String,
    categories: Vec<CategoryOption>,
    selected_category: &'static str,
    export_pdf: bool,
    export_word: bool,
    error: Option<&'a str>,
    result: Option<&'a ResultView>,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_NAME, INDEX)?;
        Ok(Self { tera })
    }

    pub fn index(
        &self,
        selection: FormSelection,
        result: Option<&ResultView>,
        error: Option<&str>,
    ) -> Result<String, tera::Error> {
        let context = IndexContext {
            accept: SpreadsheetFormat::accept_attribute(),
            categories: EquationCategory::ALL
                .iter()
                .map(|c| CategoryOption {
                    id: c.id(),
                    label: c.label(),
                })
                .collect(),
            selected_category: selection.category.id(),
            export_pdf: selection.options.pdf,
            export_word: selection.options.word,
            error,
            result,
        };
        self.tera
            .render(INDEX_NAME, &Context::from_serialize(&context)?)
    }
}
