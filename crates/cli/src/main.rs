// leadset CLI - lead dedup operations, headless

mod dedupe;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_DEDUPE_IO, EXIT_DEDUPE_PARSE, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "leadset")]
#[command(about = "Deduplicate customer-lead documents with an audit trail")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate a lead document and write the dupless + changelog files
    #[command(after_help = "\
Examples:
  leadset dedupe leads.json
  leadset dedupe leads.json --json
  leadset dedupe leads.json --output clean.json --quiet
  leadset dedupe leads.json --config nightly.toml")]
    Dedupe {
        /// Path to the JSON lead document
        input: PathBuf,

        /// Path to a TOML run configuration
        #[arg(long, env = "LEADSET_CONFIG")]
        config: Option<PathBuf>,

        /// Output the full run result as JSON to stdout instead of the changelog
        #[arg(long)]
        json: bool,

        /// Write the dupless document here instead of next to the input
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress the changelog on stdout
        #[arg(long)]
        quiet: bool,
    },

    /// Parse a lead document (and config) without writing anything
    #[command(after_help = "\
Examples:
  leadset validate leads.json
  leadset validate leads.json --config nightly.toml")]
    Validate {
        /// Path to the JSON lead document
        input: PathBuf,

        /// Path to a TOML run configuration
        #[arg(long, env = "LEADSET_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dedupe {
            input,
            config,
            json,
            output,
            quiet,
        } => dedupe::cmd_dedupe(input, config, json, output, quiet),
        Commands::Validate { input, config } => dedupe::cmd_validate(input, config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_DEDUPE_IO,
            message: msg.into(),
            hint: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_DEDUPE_PARSE,
            message: msg.into(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
