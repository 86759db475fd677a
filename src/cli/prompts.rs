//! Mode-aware input prompts used by the menu handlers.
//!
//! Interactive mode goes through dialoguer; script mode consumes plain lines
//! from the shared script input.

use dialoguer::{Confirm, Input};

use crate::cli::core::{CliMode, CommandError, ShellContext};
use crate::cli::output;
use crate::ledger::parse_amount;

/// Free-text prompt. When `allow_empty` is set, a blank answer is returned
/// as an empty string instead of being rejected.
pub fn text(
    context: &mut ShellContext,
    label: &str,
    allow_empty: bool,
) -> Result<String, CommandError> {
    match context.mode {
        CliMode::Interactive => {
            let value: String = Input::with_theme(&context.theme)
                .with_prompt(label)
                .allow_empty(allow_empty)
                .interact_text()?;
            Ok(value.trim().to_string())
        }
        CliMode::Script => {
            output::prompt(label);
            let line = context.read_script_line()?.ok_or(CommandError::Cancelled)?;
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() && !allow_empty {
                return Err(CommandError::InvalidArguments(format!(
                    "{label} cannot be empty"
                )));
            }
            Ok(trimmed)
        }
    }
}

/// Reads an amount as text and parses it through the ledger rules.
pub fn amount(context: &mut ShellContext, label: &str) -> Result<f64, CommandError> {
    let raw = text(context, label, false)?;
    Ok(parse_amount(&raw)?)
}

/// Reads an optional amount. A blank answer keeps the current value, and an
/// answer that does not parse is skipped the same way.
pub fn optional_amount(
    context: &mut ShellContext,
    label: &str,
) -> Result<Option<f64>, CommandError> {
    let raw = text(context, label, true)?;
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(parse_amount(&raw).ok())
}

/// Yes/no confirmation. Script mode parses `y`/`n` lines, asking again on
/// anything else.
pub fn confirm(
    context: &mut ShellContext,
    question: &str,
    default: bool,
) -> Result<bool, CommandError> {
    match context.mode {
        CliMode::Interactive => {
            let confirmed = Confirm::with_theme(&context.theme)
                .with_prompt(question)
                .default(default)
                .interact()?;
            Ok(confirmed)
        }
        CliMode::Script => loop {
            output::prompt(format!("{question} [y/n]"));
            let Some(line) = context.read_script_line()? else {
                return Err(CommandError::Cancelled);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => output::warning(format!("Please answer y or n, got `{other}`.")),
            }
        },
    }
}
