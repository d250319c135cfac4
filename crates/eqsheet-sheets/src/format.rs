use std::path::Path;

use crate::error::SheetError;

/// Spreadsheet formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx,
    Xls,
}

impl SpreadsheetFormat {
    pub const ALL: [SpreadsheetFormat; 2] = [SpreadsheetFormat::Xlsx, SpreadsheetFormat::Xls];

    pub fn extension(&self) -> &'static str {
        match self {
            SpreadsheetFormat::Xlsx => "xlsx",
            SpreadsheetFormat::Xls => "xls",
        }
    }

    /// Check an uploaded file name against the extension allow-list.
    pub fn from_file_name(file_name: &str) -> Result<Self, SheetError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        Self::ALL
            .into_iter()
            .find(|format| ext.as_deref() == Some(format.extension()))
            .ok_or_else(|| SheetError::UnsupportedExtension {
                file_name: file_name.to_string(),
                allowed: Self::ALL
                    .iter()
                    .map(|f| f.extension())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Value for an HTML `accept` attribute.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .map(|f| format!(".{}", f.extension()))
            .collect::<Vec<_>>()
            .join(",")
    }
}
