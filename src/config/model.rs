//! Config struct definition.

use super::types::{CommandsConfig, TemplateConfig};
use serde::{Deserialize, Serialize};

/// Configuration for both tools.
///
/// Mirrors the YAML layout:
///
/// ```yaml
/// template:
///   output_path: generated_data.xlsx
///   row_count: 30
///   password_length: 8
///   sheet_name: Data
/// commands:
///   input_path: accounts.csv
///   output_path: output.csv
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template generator settings.
    pub template: TemplateConfig,

    /// Command formatter settings.
    pub commands: CommandsConfig,
}
