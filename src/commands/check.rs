use crate::OutputFormat;
use crate::commands::template::CommandTemplate;
use crate::display::{format_json_output, print_success};
use crate::error::EnvarsError;
use crate::validation::{name_rejection, validate_env_name, validate_new_env_name};
use serde::Serialize;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub name: String,
    pub existing: Vec<String>,
    /// Name being replaced when checking a rename
    pub current: Option<String>,
}

/// Output for the check command. Rejected names surface as errors, so
/// `valid` is always true here.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    pub valid: bool,
    #[serde(skip)]
    pub message: String,
}

pub struct CheckCommand;

impl CommandTemplate for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckOutput;

    fn execute_operation(&self, args: Self::Args) -> Result<Self::Output, EnvarsError> {
        let valid = match args.current.as_deref() {
            Some(current) => validate_env_name(&args.name, current, &args.existing),
            None => validate_new_env_name(&args.name, &args.existing),
        };

        if !valid {
            let reason = name_rejection(&args.name, &args.existing)
                .unwrap_or_else(|| format!("'{}' is not allowed", args.name));
            return Err(EnvarsError::InvalidName(reason));
        }

        let message = match args.current.as_deref() {
            Some(current) if current == args.name => format!("'{}' is unchanged", args.name),
            Some(current) => format!("'{}' can be renamed to '{}'", current, args.name),
            None => format!("'{}' is available", args.name),
        };
        Ok(CheckOutput {
            name: args.name,
            current: args.current,
            valid: true,
            message,
        })
    }

    fn format_output(&self, output: Self::Output, format: &OutputFormat) -> Result<(), EnvarsError> {
        match format {
            OutputFormat::Json => println!("{}", format_json_output(&output)?),
            _ => print_success(&output.message),
        }
        Ok(())
    }
}

/// Check whether a name can be added, or used as a rename target
pub fn check(
    format: &OutputFormat,
    name: &str,
    existing: &[String],
    current: Option<&str>,
) -> Result<(), EnvarsError> {
    let command = CheckCommand;
    let args = CheckArgs {
        name: name.to_string(),
        existing: existing.to_vec(),
        current: current.map(str::to_string),
    };

    command.execute(format, args)
}
