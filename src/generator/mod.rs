//! Account sheet template generation.
//!
//! The template carries a running index and two fresh passwords per row;
//! every operator-supplied column is left blank for filling in by hand.

mod password;

pub use password::generate_password;

use crate::account::{CLOUD_PASSWORD, INDEX, PASSWORD, TEMPLATE_HEADERS};
use crate::error::Result;
use crate::table::{Cell, Table, write_table};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Template shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    pub row_count: usize,
    pub password_length: usize,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            row_count: 30,
            password_length: 8,
        }
    }
}

/// Build the template table without touching the file system.
pub fn build_template<R: Rng + ?Sized>(rng: &mut R, options: TemplateOptions) -> Table {
    let mut table = Table::new(TEMPLATE_HEADERS);

    for index in 1..=options.row_count {
        let row = TEMPLATE_HEADERS
            .iter()
            .map(|&column| match column {
                INDEX => Cell::Integer(index as i64),
                PASSWORD | CLOUD_PASSWORD => {
                    Cell::Text(generate_password(&mut *rng, options.password_length))
                }
                _ => Cell::empty(),
            })
            .collect();
        table.push_row(row);
    }

    table
}

/// Write a fresh template to `output_path`, replacing any existing file.
pub fn create_template(
    output_path: &Path,
    options: TemplateOptions,
    sheet_name: &str,
) -> Result<()> {
    let table = build_template(&mut rand::rng(), options);
    write_table(output_path, &table, sheet_name)?;

    info!(
        output = %output_path.display(),
        rows = options.row_count,
        password_length = options.password_length,
        "template created"
    );
    Ok(())
}
