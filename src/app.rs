use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{email::validate_email, shell_state::ShellState, suggestions::suggest},
    ui::{self, LineEventSource, TerminalNotifier},
    usecases::{bootstrap, context::AppContext, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let bootstrap::Bootstrapped {
        context,
        log_guard: _log_guard,
    } = bootstrap::bootstrap(cli.config.as_deref())?;

    let stdout = io::stdout();
    match cli.command_or_default() {
        Command::Run => {
            let mut event_source = LineEventSource::new(io::stdin().lock());
            let mut orchestrator = DefaultShellOrchestrator::new(
                context.store,
                TerminalNotifier::new(io::stdout()),
                context.config.notifications,
            );
            ui::shell::start(&mut event_source, &mut orchestrator, &mut io::stdout())?;
        }
        Command::List => print_lines(&mut stdout.lock(), list_lines(context))?,
        Command::Check { email } => {
            let (line, code) = check_line(&email);
            writeln!(stdout.lock(), "{line}")?;
            return Ok(code);
        }
        Command::Suggest { query } => {
            print_lines(&mut stdout.lock(), suggest_lines(&context, &query))?
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn list_lines(context: AppContext) -> Vec<String> {
    ui::view::render(&ShellState::new(context.store))
}

fn check_line(email: &str) -> (String, ExitCode) {
    match validate_email(email) {
        Ok(valid) => (format!("{valid}: valid"), ExitCode::SUCCESS),
        Err(error) => (format!("{email}: {error}"), ExitCode::FAILURE),
    }
}

fn suggest_lines(context: &AppContext, query: &str) -> Vec<String> {
    let options = suggest(context.store.recipients(), query);
    if options.is_empty() {
        return vec![format!("No suggestions for {query:?}")];
    }

    options
        .iter()
        .map(|option| format!("{:<40} {}", option.value(), option.label()))
        .collect()
}

fn print_lines(out: &mut dyn Write, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
