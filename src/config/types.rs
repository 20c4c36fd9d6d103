//! Per-tool configuration sections and their defaults.

use crate::generator::TemplateOptions;
use crate::table::DEFAULT_SHEET_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "acctprep.yaml";

/// Largest template that still fits a worksheet next to its header row.
pub const MAX_TEMPLATE_ROWS: usize = 1_048_575;

/// Longest text a worksheet cell can hold.
pub const MAX_PASSWORD_LENGTH: usize = 32_767;

/// Worksheet names are limited to 31 characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters a worksheet name may not contain.
pub const FORBIDDEN_SHEET_NAME_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Settings for `acctprep template`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Destination file; `.xlsx` writes a workbook, anything else CSV.
    pub output_path: PathBuf,

    /// Number of data rows below the header.
    pub row_count: usize,

    /// Length of each generated password.
    pub password_length: usize,

    /// Worksheet name when writing a workbook.
    pub sheet_name: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let options = TemplateOptions::default();
        Self {
            output_path: default_template_output(),
            row_count: options.row_count,
            password_length: options.password_length,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl TemplateConfig {
    pub fn options(&self) -> TemplateOptions {
        TemplateOptions {
            row_count: self.row_count,
            password_length: self.password_length,
        }
    }
}

/// Settings for `acctprep commands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Populated account sheet to read.
    pub input_path: PathBuf,

    /// Augmented sheet to write.
    pub output_path: PathBuf,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            input_path: default_commands_input(),
            output_path: default_commands_output(),
        }
    }
}

pub(crate) fn default_template_output() -> PathBuf {
    PathBuf::from("generated_data.xlsx")
}
pub(crate) fn default_commands_input() -> PathBuf {
    PathBuf::from("accounts.csv")
}
pub(crate) fn default_commands_output() -> PathBuf {
    PathBuf::from("output.csv")
}
