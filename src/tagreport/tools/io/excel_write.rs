use rust_xlsxwriter::Workbook;

use crate::tagreport::tools::error::{ExportError, Result};
use crate::tagreport::tools::model::{CellValue, ColumnSpec, DisplayRow};

/// Name of the single sheet carrying the exported table.
pub const SHEET_NAME: &str = "Applications";

/// Serialises the columns and rows into an xlsx workbook held in memory.
///
/// The sheet gets one header row built from the column declarations, then one
/// data row per display row in input order. Cells are bound by matching each
/// column key against the row fields.
pub fn write_buffer(columns: &[ColumnSpec], rows: &[DisplayRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, column) in columns.iter().enumerate() {
        let col = col_idx as u16;
        worksheet.write_string(0, col, &column.header)?;
        worksheet.set_column_width(col, column.width)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, column) in columns.iter().enumerate() {
            let value = row.field(&column.key).ok_or_else(|| ExportError::UnknownColumn {
                key: column.key.clone(),
            })?;

            match value {
                CellValue::Text(text) => {
                    worksheet.write_string((row_idx + 1) as u32, col_idx as u16, &text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number((row_idx + 1) as u32, col_idx as u16, number)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
