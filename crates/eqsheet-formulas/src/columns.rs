use serde::Serialize;

use eqsheet_core::models::table::InputTable;

/// A column a formula reads: the header used in the original workbooks
/// plus English aliases that are accepted as well.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub aliases: &'static [&'static str],
}

impl ColumnSpec {
    pub const fn new(header: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { header, aliases }
    }

    /// The name under which this column appears in `table`, preferring the
    /// canonical header over aliases.
    pub fn find_in<'a>(&self, table: &'a InputTable) -> Option<&'a str> {
        std::iter::once(self.header)
            .chain(self.aliases.iter().copied())
            .find(|name| table.has_column(name))
    }
}

/// Shared first column of every category.
pub const CASE: ColumnSpec = ColumnSpec::new("Caso", &["Case"]);

/// One input row reduced to the literals a formula substitutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaRow {
    pub case: String,
    pub params: Vec<String>,
}

/// Escape LaTeX special characters for text-mode cells.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Parameter at `idx`, or empty when the row is short.
pub(crate) fn param(params: &[String], idx: usize) -> &str {
    params.get(idx).map(String::as_str).unwrap_or_default()
}
