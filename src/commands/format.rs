//! Implementation of the `acctprep commands` command.

use crate::cli::CommandsArgs;
use crate::config::{CommandsConfig, Config};
use crate::error::Result;
use crate::formatter::process;

/// Fold command-line overrides into the formatter settings.
pub(crate) fn apply_overrides(config: &mut CommandsConfig, args: CommandsArgs) {
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
}

/// Execute the `acctprep commands` command.
///
/// Reads the account sheet, derives both command columns and writes the
/// augmented sheet. The input file is left untouched.
pub fn cmd_commands(args: CommandsArgs, mut config: Config) -> Result<()> {
    apply_overrides(&mut config.commands, args);
    config.commands.validate()?;

    let commands = &config.commands;
    let summary = process(&commands.input_path, &commands.output_path)?;

    println!("Data written to: {}", commands.output_path.display());
    println!(
        "  {} row(s): {} add command(s), {} provider token command(s)",
        summary.rows, summary.add_commands, summary.provider_commands
    );
    Ok(())
}
