//! Command-line interface for three_musketeers.

use clap::Parser;
use std::path::PathBuf;

/// Three Musketeers - play a saved board in the terminal
#[derive(Parser, Debug)]
#[command(name = "three_musketeers")]
#[command(about = "Play Three Musketeers from a board file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board file to load (five lines of `M`, `o`, `.` separated by spaces)
    pub board: PathBuf,

    /// Path to the game configuration file
    #[arg(short, long, default_value = "three_musketeers.toml")]
    pub config: PathBuf,
}
