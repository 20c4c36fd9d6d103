//! Config loading, validation, and serialization.

use super::model::Config;
use super::types::{
    CommandsConfig, DEFAULT_CONFIG_FILE, FORBIDDEN_SHEET_NAME_CHARS, MAX_PASSWORD_LENGTH,
    MAX_SHEET_NAME_LEN, MAX_TEMPLATE_ROWS, TemplateConfig,
};
use crate::error::{PrepError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields are ignored; missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrepError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            PrepError::ConfigError(format!("config file '{}': {}", path.display(), e))
        })
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Without one, `acctprep.yaml` in `dir` is
    /// used when present and the built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            debug!(path = %implicit.display(), "loading config");
            return Self::load(implicit);
        }

        debug!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrepError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PrepError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - `template.password_length` must be positive and fit in a cell
    /// - `template.row_count` must fit in a worksheet
    /// - `template.sheet_name` must be a legal worksheet name
    /// - all paths must be non-empty
    pub fn validate(&self) -> Result<()> {
        self.template.validate()?;
        self.commands.validate()
    }
}

impl TemplateConfig {
    /// Validate the `template` section on its own.
    pub fn validate(&self) -> Result<()> {
        if self.password_length == 0 {
            return Err(invalid("template.password_length must be greater than 0"));
        }
        if self.password_length > MAX_PASSWORD_LENGTH {
            return Err(invalid(&format!(
                "template.password_length must be at most {} (got {})",
                MAX_PASSWORD_LENGTH, self.password_length
            )));
        }

        if self.row_count > MAX_TEMPLATE_ROWS {
            return Err(invalid(&format!(
                "template.row_count must be at most {} (got {})",
                MAX_TEMPLATE_ROWS, self.row_count
            )));
        }

        let sheet_name = self.sheet_name.as_str();
        if sheet_name.is_empty() || sheet_name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(invalid(&format!(
                "template.sheet_name must be 1 to {} characters",
                MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = sheet_name
            .chars()
            .find(|c| FORBIDDEN_SHEET_NAME_CHARS.contains(c))
        {
            return Err(invalid(&format!(
                "template.sheet_name must not contain '{}'",
                c
            )));
        }

        non_empty_path("template.output_path", &self.output_path)
    }
}

impl CommandsConfig {
    /// Validate the `commands` section on its own.
    pub fn validate(&self) -> Result<()> {
        non_empty_path("commands.input_path", &self.input_path)?;
        non_empty_path("commands.output_path", &self.output_path)
    }
}

fn non_empty_path(name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(invalid(&format!("{} must not be empty", name)));
    }
    Ok(())
}

fn invalid(message: &str) -> PrepError {
    PrepError::ConfigError(format!("config validation failed: {}", message))
}
