//! Excel workbook tables via umya-spreadsheet.
//!
//! Only the first worksheet is read. Row 1 is the header; every following row
//! up to the highest used row is data, so blank rows inside the used range
//! come through as rows of empty cells.

use super::{Cell, Table, read_error, write_error};
use crate::error::Result;
use std::io::Cursor;
use std::path::Path;
use umya_spreadsheet::Worksheet;

/// Data type tag of a number cell.
const NUMERIC_TYPE: &str = "n";

pub(super) fn read(path: &Path) -> Result<Table> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| read_error(path, e))?;
    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| read_error(path, "workbook has no worksheets"))?;

    let (max_col, max_row) = sheet.get_highest_column_and_row();
    if max_col == 0 || max_row == 0 {
        return Err(read_error(path, "no columns to parse from worksheet"));
    }

    let mut table = Table::new((1..=max_col).map(|col| sheet.get_value((col, 1))));
    for row in 2..=max_row {
        let cells = (1..=max_col).map(|col| read_cell(sheet, col, row)).collect();
        table.push_row(cells);
    }

    Ok(table)
}

/// Numeric cells stay numeric; everything else is read as its text.
fn read_cell(sheet: &Worksheet, col: u32, row: u32) -> Cell {
    let Some(cell) = sheet.get_cell((col, row)) else {
        return Cell::empty();
    };

    if cell.get_data_type() == NUMERIC_TYPE
        && let Some(value) = cell.get_value_number()
    {
        return Cell::from_number(value);
    }
    Cell::Text(cell.get_value().to_string())
}

/// Serialize a table as a single-sheet workbook.
///
/// Text cells are stored as strings without type guessing, so values such as
/// phone numbers keep their exact text. Numeric cells are stored as numbers.
pub(super) fn render(path: &Path, table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book
        .new_sheet(sheet_name)
        .map_err(|e| write_error(path, e))?;

    for (col, header) in (1u32..).zip(table.headers()) {
        sheet.get_cell_mut((col, 1)).set_value_string(header.as_str());
    }

    for (row, cells) in (2u32..).zip(table.rows()) {
        for (col, cell) in (1u32..).zip(cells) {
            let target = sheet.get_cell_mut((col, row));
            match cell {
                Cell::Text(text) => {
                    target.set_value_string(text.as_str());
                }
                Cell::Integer(value) => {
                    target.set_value_number(*value as f64);
                }
                Cell::Number(value) => {
                    target.set_value_number(*value);
                }
            }
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buffer)
        .map_err(|e| write_error(path, e))?;
    Ok(buffer.into_inner())
}
