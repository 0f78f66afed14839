//! Three Musketeers - terminal game
//!
//! Loads a board file, plays it interactively on stdin/stdout and saves the
//! final board next to the original.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use three_musketeers::{FileStore, GameConfig, GameSession, Orchestrator, StdinSource, load};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    run(cli)
}

/// Plays one game. Every expected failure is printed and exits cleanly.
#[instrument(skip_all, fields(board = %cli.board.display()))]
fn run(cli: Cli) -> Result<()> {
    let config = match GameConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            println!("{}", e);
            return Ok(());
        }
    };

    let board = match load(&cli.board) {
        Ok(board) => board,
        Err(e) => {
            error!(error = %e, "Failed to load board");
            println!("{}", e);
            println!("Failed to read the board from the file.");
            return Ok(());
        }
    };

    let store = FileStore::beside(&cli.board, config.save_prefix());
    info!(save_to = %store.target().display(), "Board will be saved on exit");

    let stdout = std::io::stdout().lock();
    let mut orchestrator =
        Orchestrator::new(GameSession::new(board), StdinSource::stdin(), store, stdout)
            .with_instructions(*config.show_instructions());
    match orchestrator.run() {
        Ok(report) => {
            info!(phase = ?report.phase(), moves = report.moves(), "Game finished");
        }
        Err(e) => error!(error = %e, "Game output failed"),
    }

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
