//! CLI argument parsing for acctprep.
//!
//! Uses clap derive macros. Every flag here overrides the matching config
//! value; the actual work lives in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// acctprep: account sheet preparation for messaging-bot onboarding.
///
/// `template` writes a blank account sheet with generated passwords.
/// `commands` reads a filled-in sheet and adds `/addaccount` and
/// `/providertoken` command columns.
#[derive(Parser, Debug)]
#[command(name = "acctprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: acctprep.yaml in the working directory, if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for acctprep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a blank account sheet.
    ///
    /// Each row gets a running index and two random passwords; the other
    /// columns are left empty for the operator. An existing file is replaced.
    Template(TemplateArgs),

    /// Add bot command columns to a filled-in account sheet.
    ///
    /// Appends "Telegram Add Command" and "Telegram Provider Token" columns;
    /// rows lacking the needed fields get empty commands.
    Commands(CommandsArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `template` command.
#[derive(Parser, Debug, Default)]
pub struct TemplateArgs {
    /// Output file (.xlsx for a workbook, anything else for CSV).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of account rows.
    #[arg(short = 'n', long)]
    pub rows: Option<usize>,

    /// Length of each generated password.
    #[arg(short = 'l', long)]
    pub password_length: Option<usize>,

    /// Worksheet name for workbook output.
    #[arg(long)]
    pub sheet_name: Option<String>,
}

/// Arguments for the `commands` command.
#[derive(Parser, Debug, Default)]
pub struct CommandsArgs {
    /// Filled-in account sheet (.xlsx or CSV).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (.xlsx for a workbook, anything else for CSV).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
