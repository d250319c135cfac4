//! eqsheet-export
//!
//! LaTeX generation from an input table, and rendering of that LaTeX
//! through external tools: `pdflatex` for PDF and `pandoc` for DOCX.

pub mod cleanup;
pub mod docx;
pub mod error;
pub mod job;
pub mod pdf;
pub mod render;
pub mod tool;
