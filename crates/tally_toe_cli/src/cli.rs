//! Command-line interface for tally_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally Toe - tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tally_toe")]
#[command(about = "Tic-tac-toe in the terminal with persisted scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tally_toe.toml")]
    pub config: PathBuf,

    /// Override the score file from the config
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Pause before announcing a win or draw, in milliseconds
        #[arg(long)]
        announce_delay_ms: Option<u64>,
    },

    /// Print the running scores
    Scores,

    /// Reset both scores to zero
    ResetScores,
}
