//! Shell context, dispatch errors, and error reporting helpers.

use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::{Config, ConfigError, ConfigManager};
use crate::errors::LedgerError;
use crate::ledger::LedgerManager;
use crate::report::ReportError;

use super::menu::Menu;
use super::output;

/// How the shell reads its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Per-command failures, reported to the user without ending the session.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("operation cancelled")]
    Cancelled,
    #[error("exit requested")]
    ExitRequested,
}

/// Fatal shell failures that end the session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Mutable state shared by every menu handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub manager: LedgerManager,
    pub menu: Menu,
    pub theme: ColorfulTheme,
    pub config: Config,
    script_input: Option<Box<dyn BufRead>>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new()?.load()?;
        output::apply_config(&config);
        let script_input = match mode {
            CliMode::Script => Some(Box::new(io::stdin().lock()) as Box<dyn BufRead>),
            CliMode::Interactive => None,
        };
        Ok(Self {
            mode,
            manager: LedgerManager::new(),
            menu: Menu::new(),
            theme: ColorfulTheme::default(),
            config,
            script_input,
        })
    }

    /// Readline prompt reflecting the current selection.
    pub(crate) fn prompt(&self) -> String {
        match self.manager.selected_budget() {
            Some(name) => format!("budget: {name} > "),
            None => "no-budget > ".to_string(),
        }
    }

    pub(crate) fn format_amount(&self, value: f64) -> String {
        format!("{}{}", self.config.currency_symbol, value)
    }

    /// Next line from the script input, or `None` at end of input.
    pub(crate) fn read_script_line(&mut self) -> io::Result<Option<String>> {
        let Some(reader) = self.script_input.as_mut() else {
            return Ok(None);
        };
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub(crate) fn suggest_choice(&self, input: &str) {
        output::warning(format!(
            "Invalid choice `{}`. Enter a number from the menu or a command name.",
            input
        ));

        if let Some(best) = self.menu.closest_keyword(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Exit the budget manager?")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Cancelled => {
                output::info("Operation cancelled.");
                Ok(())
            }
            CommandError::Ledger(LedgerError::NoBudgetSelected) => {
                output::error("No budget selected.");
                output::info("Hint: select a budget (menu option 2) or create one first.");
                Ok(())
            }
            CommandError::Report(ReportError::Empty) => {
                output::warning("No budgets found. Please create a budget first.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}
