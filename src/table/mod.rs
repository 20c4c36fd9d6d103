//! In-memory tables and their on-disk formats.
//!
//! A [`Table`] is an ordered header row plus ordered data rows. Cell text is
//! kept exactly as read and workbook numbers stay numbers, so pass-through
//! columns come out unchanged.
//! The file format is chosen from the path extension: `.xlsx` is an Excel
//! workbook, anything else is comma-separated text.

mod csv_io;
mod xlsx_io;


use crate::error::{PrepError, Result};
use crate::fs::atomic_write;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Worksheet name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "Data";

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text exactly as read or written.
    Text(String),
    /// Integer value; stored as a number in workbooks.
    Integer(i64),
    /// Non-integral workbook number.
    Number(f64),
}

impl Cell {
    /// An empty text cell.
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// A numeric cell, as an [`Cell::Integer`] when the value is whole.
    pub fn from_number(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Cell::Integer(value as i64)
        } else {
            Cell::Number(value)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

/// Headers plus rows, every row exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header row.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a data row.
    ///
    /// Short rows are padded with empty text cells. Readers reject rows wider
    /// than the header before they reach the table; any such row is cut to
    /// the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        debug_assert!(row.len() <= self.headers.len());
        row.resize(self.headers.len(), Cell::empty());
        self.rows.push(row);
    }

    /// Position of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Replace the values of column `name`, or append it as a new column.
    ///
    /// `values` must hold one entry per data row.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        debug_assert_eq!(values.len(), self.rows.len());

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }
}

/// On-disk table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Xlsx,
}

impl TableFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => TableFormat::Xlsx,
            _ => TableFormat::Csv,
        }
    }
}

/// Read a whole table from `path`.
pub fn read_table(path: &Path) -> Result<Table> {
    let format = TableFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading table");

    let table = match format {
        TableFormat::Csv => csv_io::read(path)?,
        TableFormat::Xlsx => xlsx_io::read(path)?,
    };

    debug!(
        columns = table.headers().len(),
        rows = table.len(),
        "table loaded"
    );
    Ok(table)
}

/// Write `table` to `path`, replacing any existing file atomically.
///
/// `sheet_name` names the worksheet when writing a workbook and is ignored
/// for CSV output.
pub fn write_table(path: &Path, table: &Table, sheet_name: &str) -> Result<()> {
    let format = TableFormat::from_path(path);
    debug!(path = %path.display(), ?format, rows = table.len(), "writing table");

    let bytes = match format {
        TableFormat::Csv => csv_io::render(path, table)?,
        TableFormat::Xlsx => xlsx_io::render(path, table, sheet_name)?,
    };

    atomic_write(path, &bytes)
}

fn read_error(path: &Path, cause: impl fmt::Display) -> PrepError {
    PrepError::ReadError(format!("'{}': {}", path.display(), cause))
}

fn write_error(path: &Path, cause: impl fmt::Display) -> PrepError {
    PrepError::WriteError(format!("'{}': {}", path.display(), cause))
}
