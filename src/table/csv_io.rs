//! Comma-separated text tables.

use super::{Cell, Table, read_error, write_error};
use crate::error::Result;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read a CSV file whose first record is the header row.
///
/// Blank lines are skipped. Rows may be shorter than the header but not
/// longer.
pub(super) fn read(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();
    if headers.is_empty() {
        return Err(read_error(path, "no columns to parse from file"));
    }

    let mut table = Table::new(
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h }),
    );

    let width = table.headers().len();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| read_error(path, e))?;
        if record.len() > width {
            return Err(read_error(
                path,
                format!(
                    "row {} has {} fields but the header has {}",
                    i + 1,
                    record.len(),
                    width
                ),
            ));
        }
        table.push_row(record.iter().map(Cell::from).collect());
    }

    Ok(table)
}

/// Serialize a table as CSV with `\n` record terminators and minimal quoting.
pub(super) fn render(path: &Path, table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(table.headers())
        .map_err(|e| write_error(path, e))?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| write_error(path, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| write_error(path, e.error()))
}
