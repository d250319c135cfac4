use eqsheet_core::models::category::EquationCategory;
use eqsheet_core::models::table::CellValue;
use eqsheet_sheets::error::SheetError;
use eqsheet_sheets::format::SpreadsheetFormat;
use eqsheet_sheets::workbook::{read_category_table, read_table, sheet_names};
use rust_xlsxwriter::Workbook;

/// Build an xlsx in memory with an Ohm sheet and an unrelated sheet.
fn ohm_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let other = workbook.add_worksheet();
    other.set_name("Notas").unwrap();
    other.write_string(0, 0, "irrelevante").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Ley de Ohm").unwrap();
    for (col, header) in ["Caso", "Voltaje_V", "Corriente_I"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "A").unwrap();
    sheet.write_number(1, 1, 10).unwrap();
    sheet.write_number(1, 2, 2).unwrap();
    // Row 2 left blank on purpose.
    sheet.write_string(3, 0, "B").unwrap();
    sheet.write_number(3, 1, 4.5).unwrap();
    sheet.write_number(3, 2, 1.5).unwrap();

    workbook.save_to_buffer().unwrap()
}

#[test]
fn lists_sheet_names_in_order() {
    let names = sheet_names(&ohm_workbook()).unwrap();
    assert_eq!(names, ["Notas", "Ley de Ohm"]);
}

#[test]
fn reads_named_sheet_rows_in_order() {
    let table = read_category_table(&ohm_workbook(), EquationCategory::OhmsLaw).unwrap();

    assert_eq!(table.columns(), ["Caso", "Voltaje_V", "Corriente_I"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0]["Caso"], CellValue::Text("A".into()));
    assert_eq!(table.rows()[0]["Voltaje_V"].to_string(), "10");
    assert_eq!(table.rows()[1]["Caso"], CellValue::Text("B".into()));
    assert_eq!(table.rows()[1]["Corriente_I"].to_string(), "1.5");
}

#[test]
fn missing_sheet_names_the_available_ones() {
    let err = read_table(&ohm_workbook(), "Energía").unwrap_err();
    match err {
        SheetError::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, "Energía");
            assert_eq!(available, "Notas, Ley de Ohm");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_and_repeated_headers_get_names() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Energía").unwrap();
    sheet.write_string(0, 0, "Caso").unwrap();
    sheet.write_string(0, 2, "Caso").unwrap();
    sheet.write_string(1, 0, "X").unwrap();
    sheet.write_number(1, 1, 1).unwrap();
    sheet.write_string(1, 2, "Y").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let table = read_table(&bytes, "Energía").unwrap();
    assert_eq!(table.columns(), ["Caso", "Unnamed: 1", "Caso.1"]);
}

#[test]
fn garbage_bytes_fail_to_open() {
    let err = read_table(b"not a spreadsheet", "Ley de Ohm").unwrap_err();
    assert!(matches!(err, SheetError::Open(_)));
}

#[test]
fn extension_allow_list() {
    assert_eq!(
        SpreadsheetFormat::from_file_name("datos.XLSX").unwrap(),
        SpreadsheetFormat::Xlsx
    );
    assert_eq!(
        SpreadsheetFormat::from_file_name("viejo.xls").unwrap(),
        SpreadsheetFormat::Xls
    );
    match SpreadsheetFormat::from_file_name("datos.csv") {
        Err(SheetError::UnsupportedExtension { allowed, .. }) => assert_eq!(allowed, "xlsx, xls"),
        other => panic!("expected UnsupportedExtension, got {other:?}"),
    }
    assert_eq!(SpreadsheetFormat::Xls.extension(), "xls");
    assert!(SpreadsheetFormat::from_file_name("sin_extension").is_err());
    assert_eq!(SpreadsheetFormat::accept_attribute(), ".xlsx,.xls");
}
