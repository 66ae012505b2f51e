//! Blueprint CLI - declarative deployment compiler
//!
//! Usage: blueprint <COMMAND>
//!
//! Commands:
//!   compile  Compile a manifest into a deployment document
//!   check    Compile a manifest and report problems
//!   inspect  Summarise a compiled document
//!   keys     Print a GitHub user's SSH keys

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;

use blueprint::config::Config;
use blueprint::presentation::output::{self, Icons};
use blueprint::presentation::{Cli, Commands};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let _ = output::emit(output::error_event(&err));
            } else {
                eprintln!("{}", output::format_error(Icons::detect(), &err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level())?;

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Compile {
            manifest,
            output,
            compact,
        } => commands::compile::cmd_compile(
            &manifest,
            output.as_deref(),
            compact,
            &config,
            cli.json,
        ),
        Commands::Check { manifest } => commands::check::cmd_check(&manifest, &config, cli.json),
        Commands::Inspect { document } => commands::inspect::cmd_inspect(&document, cli.json),
        Commands::Keys { user } => commands::keys::cmd_keys(&user, &config, cli.json),
    }
}

/// Diagnostics go to stderr; stdout is reserved for documents and events.
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
