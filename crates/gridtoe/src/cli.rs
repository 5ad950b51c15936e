//! Command-line interface for gridtoe.

use clap::Parser;

/// Gridtoe - tic-tac-toe on an N×N board against a random computer
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe on an N×N board against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size N in [1,9]; anything else falls back to 3
    #[arg(allow_hyphen_values = true)]
    pub size: Option<String>,
}
