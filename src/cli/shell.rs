use std::{
    borrow::Cow,
    env,
    io::{self, IsTerminal},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::handlers;
use crate::cli::output;
use crate::utils::build_info;

const SCRIPT_MODE_ENV: &str = "TALLYBOOK_CLI_SCRIPT";
const EXIT_MESSAGE: &str = "Exiting the budget manager.";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_MODE_ENV).is_some() || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    print_banner();

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn print_banner() {
    let build = build_info::current();
    output::section(format!(
        "Tallybook v{} ({}, {})",
        build.version, build.git_hash, build.profile
    ));
}

fn render_menu(context: &ShellContext) {
    output::separator();
    for line in context.menu.lines() {
        println!("{line}");
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<MenuHelper, DefaultHistory>::new()?;
    let helper = MenuHelper::new(context.menu.keywords());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    loop {
        render_menu(context);
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_choice(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    output::info(EXIT_MESSAGE);
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info(EXIT_MESSAGE);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    loop {
        render_menu(context);
        let line = match context.read_script_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                output::info(EXIT_MESSAGE);
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match handle_choice(context, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_choice(context: &mut ShellContext, input: &str) -> Result<LoopControl, CommandError> {
    let Some(action) = context.menu.resolve(input) else {
        context.suggest_choice(input);
        return Ok(LoopControl::Continue);
    };

    match handlers::dispatch(context, action) {
        Ok(()) => Ok(LoopControl::Continue),
        Err(CommandError::ExitRequested) => {
            output::info(EXIT_MESSAGE);
            Ok(LoopControl::Exit)
        }
        Err(err) => Err(err),
    }
}

struct MenuHelper {
    keywords: Vec<String>,
}

impl MenuHelper {
    fn new(keywords: Vec<&'static str>) -> Self {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|keyword| keyword.to_ascii_lowercase())
            .collect();
        keywords.sort();
        keywords.dedup();
        Self { keywords }
    }
}

impl Helper for MenuHelper {}

impl Completer for MenuHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .keywords
            .iter()
            .filter(|keyword| keyword.starts_with(&needle))
            .map(|keyword| Pair {
                display: keyword.clone(),
                replacement: keyword.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for MenuHelper {
    type Hint = String;
}

impl Highlighter for MenuHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for MenuHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}
