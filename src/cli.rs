//! Command-line interface for issue_arcade.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use issue_arcade::Variant;

/// Issue Arcade - issue-driven tic-tac-toe and connect-four
#[derive(Parser, Debug)]
#[command(name = "issue_arcade")]
#[command(about = "Apply one issue-title command to a persisted board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (defaults to $ISSUE_ARCADE_CONFIG, then ./arcade.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply one instruction (a move or a reset) to the stored board
    Play {
        /// Game variant: tictactoe (ttt) or connect4 (c4)
        variant: Variant,

        /// Free-text instruction, e.g. "move: B2", "c4move: 4", "reset"
        instruction: Option<String>,

        /// Identity of whoever issued the instruction
        #[arg(short, long)]
        player: Option<String>,

        /// Regenerate the markdown page after a state change
        #[arg(long)]
        render: bool,
    },

    /// Regenerate the markdown page from the stored board
    Render {
        /// Game variant: tictactoe (ttt) or connect4 (c4)
        variant: Variant,
    },

    /// Print the stored board to the terminal
    Show {
        /// Game variant: tictactoe (ttt) or connect4 (c4)
        variant: Variant,
    },

    /// Print the effective configuration as TOML
    Config,
}
