//! CLI entry point for the activity board.
//!
//! Drives the same board controller as the browser front end, against the
//! activities API over HTTP.

mod terminal;

use std::process::ExitCode;

use anyhow::{Context, Result};
use board_core::config::DEFAULT_BASE_URL;
use board_core::{Board, BoardConfig, HttpActivityApi, Outcome};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use terminal::TerminalView;

/// activity-board: browse and manage activity signups
#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Origin serving the activities API
    #[arg(long, global = true, env = "ACTIVITY_BOARD_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List activities with their participants
    List,

    /// Sign a student up for an activity
    Signup {
        /// Activity name, e.g. "Chess Club"
        #[arg(short, long)]
        activity: String,

        /// Student email
        #[arg(short, long)]
        email: String,
    },

    /// Remove a student from an activity
    Unregister {
        /// Activity name
        #[arg(short, long)]
        activity: String,

        /// Student email
        #[arg(short, long)]
        email: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = BoardConfig::with_base_url(cli.base_url);
    let api = HttpActivityApi::new(&config.base_url)
        .with_context(|| format!("Invalid API origin: {}", config.base_url))?;

    let assume_yes = matches!(cli.command, Commands::Unregister { yes: true, .. });
    let board = Board::new(api, TerminalView::new(assume_yes), config);

    let outcome = match cli.command {
        Commands::List => board.load_activities().await,
        Commands::Signup { activity, email } => board.submit_signup(&activity, &email).await,
        Commands::Unregister {
            activity, email, ..
        } => board.remove_participant(&activity, &email).await,
    };

    Ok(exit_code(outcome))
}

fn exit_code(outcome: Outcome) -> ExitCode {
    if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
