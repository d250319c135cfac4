use std::io::Cursor;

use calamine::{Data, Reader, Sheets, open_workbook_auto_from_rs};

use eqsheet_core::models::category::EquationCategory;
use eqsheet_core::models::table::{CellValue, InputTable, Row};

use crate::error::SheetError;

type Workbook = Sheets<Cursor<Vec<u8>>>;

fn open(bytes: &[u8]) -> Result<Workbook, SheetError> {
    open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| SheetError::Open(e.to_string()))
}

/// List the sheet names of an in-memory workbook.
pub fn sheet_names(bytes: &[u8]) -> Result<Vec<String>, SheetError> {
    let workbook = open(bytes)?;
    Ok(workbook.sheet_names().to_vec())
}

/// Read the sheet named after `category` into a table.
pub fn read_category_table(
    bytes: &[u8],
    category: EquationCategory,
) -> Result<InputTable, SheetError> {
    read_table(bytes, category.label())
}

/// Read one sheet into a table.
///
/// The first row of the used range holds the headers. Blank headers
/// become `Unnamed: <index>` and repeated ones get a `.<n>` suffix.
/// Fully empty rows are skipped; short rows are padded with empty cells.
pub fn read_table(bytes: &[u8], sheet: &str) -> Result<InputTable, SheetError> {
    let mut workbook = open(bytes)?;

    let names = workbook.sheet_names().to_vec();
    if !names.iter().any(|n| n == sheet) {
        return Err(SheetError::SheetNotFound {
            sheet: sheet.to_string(),
            available: names.join(", "),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| SheetError::Read {
            sheet: sheet.to_string(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        tracing::debug!(sheet, "worksheet is empty");
        return Ok(InputTable::default());
    };

    let headers = header_names(header_cells);
    let mut table = InputTable::new(headers.clone());

    for cells in rows {
        if cells.iter().all(|c| cell_value(c).is_empty()) {
            continue;
        }
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = cells.get(idx).map(cell_value).unwrap_or(CellValue::Empty);
                (header.clone(), value)
            })
            .collect();
        table.push_row(row);
    }

    tracing::debug!(
        sheet,
        columns = table.columns().len(),
        rows = table.len(),
        "worksheet read"
    );
    Ok(table)
}

fn header_names(cells: &[Data]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(cells.len());
    for (idx, cell) in cells.iter().enumerate() {
        let text = cell_value(cell).to_string().trim().to_string();
        let base = if text.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            text
        };

        let mut name = base.clone();
        let mut n = 1;
        while headers.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        headers.push(name);
    }
    headers
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}
