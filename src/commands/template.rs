//! Implementation of the `acctprep template` command.

use crate::cli::TemplateArgs;
use crate::config::{Config, TemplateConfig};
use crate::error::Result;
use crate::generator::create_template;

/// Fold command-line overrides into the template settings.
pub(crate) fn apply_overrides(config: &mut TemplateConfig, args: TemplateArgs) {
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(rows) = args.rows {
        config.row_count = rows;
    }
    if let Some(length) = args.password_length {
        config.password_length = length;
    }
    if let Some(sheet_name) = args.sheet_name {
        config.sheet_name = sheet_name;
    }
}

/// Execute the `acctprep template` command.
///
/// Writes `row_count` blank account rows with generated passwords to the
/// configured output path, replacing any existing file.
pub fn cmd_template(args: TemplateArgs, mut config: Config) -> Result<()> {
    apply_overrides(&mut config.template, args);
    config.template.validate()?;

    let template = &config.template;
    create_template(&template.output_path, template.options(), &template.sheet_name)?;

    println!("Template created: {}", template.output_path.display());
    Ok(())
}
