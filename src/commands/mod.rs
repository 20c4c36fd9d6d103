//! Command implementations for acctprep.
//!
//! Resolves the configuration once, then routes each subcommand to its
//! handler.

mod format;
mod template;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

pub use format::cmd_commands;
pub use template::cmd_template;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Command::Template(args) => cmd_template(args, config),
        Command::Commands(args) => cmd_commands(args, config),
        Command::Config => cmd_config(&config),
    }
}

/// Print the effective configuration as YAML.
fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
