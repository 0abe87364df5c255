use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rcpt", about = "Pick email recipients grouped by domain")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive recipient shell on stdin
    Run,
    /// Print the available and selected panels once
    List,
    /// Check whether an address is a valid email
    Check { email: String },
    /// Show autocomplete options for a partial address
    Suggest { query: String },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["rcpt"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["rcpt", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_check_and_suggest_arguments() {
        let cli = Cli::parse_from(["rcpt", "check", "a@b.com"]);
        assert!(matches!(cli.command_or_default(), Command::Check { email } if email == "a@b.com"));

        let cli = Cli::parse_from(["rcpt", "-c", "x.toml", "suggest", "qwerty"]);
        assert!(matches!(cli.command_or_default(), Command::Suggest { query } if query == "qwerty"));
    }
}
