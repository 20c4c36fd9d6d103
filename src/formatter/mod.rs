//! Bot command formatting for populated account sheets.
//!
//! Every row gets two derived columns, an `/addaccount` command and a
//! `/providertoken` command. A row that lacks the fields for a command gets an
//! empty string in that column; it never stops the batch.

#[cfg(test)]
mod tests;

use crate::account::{
    ACCESS_TOKEN, ADD_COMMAND, AUTH_TG_QUERY_LINK, AccountRecord, FORMATTER_INPUTS,
    PROVIDER_TOKEN_COMMAND, PROXY, REFRESH_TOKEN, TELEGRAM_NAME, is_present,
};
use crate::error::{PrepError, Result};
use crate::table::{Cell, DEFAULT_SHEET_NAME, Table, read_table, write_table};
use std::path::Path;
use tracing::{debug, info, warn};

/// Session offset passed to `/addaccount`.
const ADD_ACCOUNT_OFFSET: &str = "-120";

/// Counts from a formatter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSummary {
    pub rows: usize,
    pub add_commands: usize,
    pub provider_commands: usize,
}

impl FormatSummary {
    /// Whether a non-empty table produced no command at all.
    pub fn nothing_derived(&self) -> bool {
        self.rows > 0 && self.add_commands == 0 && self.provider_commands == 0
    }
}

/// Coerce a cell to text with surrounding whitespace removed.
fn field_text(cell: Option<&Cell>) -> String {
    cell.map(|c| c.to_string().trim().to_string())
        .unwrap_or_default()
}

/// Build the `/addaccount` command, or `""` when a required field is missing.
pub fn format_add_account(record: &AccountRecord<'_>) -> String {
    let required = [
        record.telegram_name,
        record.access_token,
        record.refresh_token,
        record.proxy,
    ];
    if !required.into_iter().all(is_present) {
        return String::new();
    }

    format!(
        "/addaccount {} {} {} {} socks5://{}",
        field_text(record.telegram_name),
        field_text(record.access_token),
        field_text(record.refresh_token),
        ADD_ACCOUNT_OFFSET,
        field_text(record.proxy),
    )
}

/// Build the `/providertoken` command, or `""` when a required field is missing.
pub fn format_provider_token(record: &AccountRecord<'_>) -> String {
    if !(is_present(record.telegram_name) && is_present(record.auth_tg_query_link)) {
        return String::new();
    }

    format!(
        "/providertoken {} {}",
        field_text(record.telegram_name),
        field_text(record.auth_tg_query_link),
    )
}

/// Column positions of the formatter's input fields.
struct InputColumns {
    telegram_name: usize,
    access_token: usize,
    refresh_token: usize,
    proxy: usize,
    auth_tg_query_link: usize,
}

impl InputColumns {
    /// Locate every input column, reporting all absent ones at once.
    fn locate(table: &Table) -> Result<Self> {
        let find = |name: &str| table.column_index(name);
        if let (
            Some(telegram_name),
            Some(access_token),
            Some(refresh_token),
            Some(proxy),
            Some(auth_tg_query_link),
        ) = (
            find(TELEGRAM_NAME),
            find(ACCESS_TOKEN),
            find(REFRESH_TOKEN),
            find(PROXY),
            find(AUTH_TG_QUERY_LINK),
        ) {
            return Ok(Self {
                telegram_name,
                access_token,
                refresh_token,
                proxy,
                auth_tg_query_link,
            });
        }

        let missing: Vec<String> = FORMATTER_INPUTS
            .iter()
            .filter(|name| find(**name).is_none())
            .map(|name| format!("'{}'", name))
            .collect();
        Err(PrepError::SchemaError(format!(
            "input is missing required column(s): {}",
            missing.join(", ")
        )))
    }

    fn record<'a>(&self, row: &'a [Cell]) -> AccountRecord<'a> {
        AccountRecord {
            telegram_name: row.get(self.telegram_name),
            access_token: row.get(self.access_token),
            refresh_token: row.get(self.refresh_token),
            proxy: row.get(self.proxy),
            auth_tg_query_link: row.get(self.auth_tg_query_link),
        }
    }
}

/// Add (or refresh) both command columns on `table`.
///
/// Original columns and row order are untouched. When the table already has
/// a command column from an earlier run its values are replaced in place.
pub fn augment(table: &mut Table) -> Result<FormatSummary> {
    let columns = InputColumns::locate(table)?;

    let mut add_commands = Vec::with_capacity(table.len());
    let mut provider_commands = Vec::with_capacity(table.len());
    let mut summary = FormatSummary {
        rows: table.len(),
        ..FormatSummary::default()
    };

    for (i, row) in table.rows().iter().enumerate() {
        let record = columns.record(row);
        let add = format_add_account(&record);
        let provider = format_provider_token(&record);

        if add.is_empty() && provider.is_empty() {
            debug!(row = i + 1, "no command derivable");
        }
        summary.add_commands += usize::from(!add.is_empty());
        summary.provider_commands += usize::from(!provider.is_empty());

        add_commands.push(Cell::Text(add));
        provider_commands.push(Cell::Text(provider));
    }

    table.set_column(ADD_COMMAND, add_commands);
    table.set_column(PROVIDER_TOKEN_COMMAND, provider_commands);
    Ok(summary)
}

/// Read `input_path`, derive the command columns, write `output_path`.
///
/// The input file is only read. The output is replaced atomically, so a
/// failure never leaves a half-written file behind.
pub fn process(input_path: &Path, output_path: &Path) -> Result<FormatSummary> {
    let mut table = read_table(input_path)?;
    let summary = augment(&mut table)?;

    if summary.nothing_derived() {
        warn!(
            input = %input_path.display(),
            "no row has enough fields for either command"
        );
    }

    write_table(output_path, &table, DEFAULT_SHEET_NAME)?;

    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        rows = summary.rows,
        add_commands = summary.add_commands,
        provider_commands = summary.provider_commands,
        "commands formatted"
    );
    Ok(summary)
}
