//! Markdown status page and plain-text board rendering.
//!
//! The page carries badges from the stats record, the board, a status banner,
//! clickable "new issue" links for every legal move, and the most recent
//! moves newest first.

mod board;
mod links;

pub use board::{markdown_grid, text_grid};
pub use links::{encode_component, issue_link, move_title};

use std::fmt::Write as _;

use issue_arcade_engine::{BoardSnapshot, GameStatus, MoveRecord, Variant};
use tracing::{debug, instrument};

use crate::config::VariantConfig;
use crate::store::Stats;

/// Renders the full markdown page for a snapshot.
#[instrument(skip_all, fields(variant = %snapshot.variant(), move_count = snapshot.move_count()))]
pub fn render_page(snapshot: &BoardSnapshot, stats: &Stats, config: &VariantConfig) -> String {
    let variant = snapshot.variant();
    let page = config.page();
    let reset = reset_phrase(config);
    let mut out = String::new();

    if let Some(title) = page.title() {
        let _ = writeln!(out, "# {}\n", title);
    }
    if let Some(intro) = page.intro() {
        let _ = writeln!(out, "{}\n", intro.trim_end());
    }

    let _ = writeln!(out, "{}", badge("Moves played", *stats.total_moves(), "blue"));
    let _ = writeln!(out, "{}", badge("Completed games", *stats.completed_games(), "brightgreen"));
    let _ = writeln!(out, "{}\n", badge("Total players", stats.player_count() as u64, "orange"));

    if !snapshot.status().is_terminal() {
        let _ = writeln!(
            out,
            "It is the **{} player's turn** to play.\n",
            variant.symbol(snapshot.turn())
        );
    }

    out.push_str(&markdown_grid(snapshot));
    out.push('\n');

    match snapshot.status() {
        GameStatus::Won(winner) => {
            let _ = writeln!(out, "### 🎉 Game Over! **{} wins!**\n", variant.symbol(*winner));
        }
        GameStatus::Draw => out.push_str("### Game Over! **It's a draw!**\n\n"),
        GameStatus::InProgress => out.push_str("Waiting for your move! Pick one below ⬇️\n\n"),
    }
    if snapshot.status().is_terminal() {
        let link = issue_link(
            page.issues_url(),
            &reset,
            &format!("Reset the {} board", variant.title()),
        );
        let _ = writeln!(out, "[Start a new game]({}) 🔄\n", link);
    }

    out.push_str("---\n\n### How to Play\n\n");
    out.push_str(how_to_play(variant));

    out.push_str("\n### Make Your Move\n\n");
    out.push_str(&links::move_links(snapshot, page.issues_url()));

    let history_limit = *page.history_limit();
    if history_limit > 0 {
        out.push_str("---\n\n### Most Recent Moves\n\n");
        out.push_str(&history_table(snapshot, history_limit));
    }

    let _ = writeln!(
        out,
        "\nTo reset the game, create an issue titled `{}`.\n\n_Last updated automatically with each move_",
        reset
    );

    debug!(bytes = out.len(), "Page rendered");
    out
}

/// Renders the board and status as plain text for terminals.
#[instrument(skip_all, fields(variant = %snapshot.variant()))]
pub fn render_text(snapshot: &BoardSnapshot) -> String {
    let variant = snapshot.variant();
    let mut out = text_grid(snapshot);
    let status = match snapshot.status() {
        GameStatus::Won(winner) => format!("{} wins!", variant.symbol(*winner)),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
        GameStatus::InProgress => format!("Current turn: {}", variant.symbol(snapshot.turn())),
    };
    let _ = writeln!(out, "\n{} (move {})", status, snapshot.move_count());
    out
}

fn reset_phrase(config: &VariantConfig) -> String {
    config
        .grammar()
        .reset_phrase()
        .unwrap_or("reset")
        .to_string()
}

fn badge(label: &str, value: u64, color: &str) -> String {
    format!(
        "![{}](https://img.shields.io/badge/{}-{}-{})",
        label,
        label.replace(' ', "_"),
        value,
        color
    )
}

fn how_to_play(variant: Variant) -> &'static str {
    match variant {
        Variant::TicTacToe => {
            "1. **Choose a position** by clicking one of the links below (or create an issue titled `move: B2`)\n\
             2. **The board updates automatically** within a few seconds\n\
             3. **X and O alternate**, X goes first\n\
             4. **First to get 3 in a row wins!** (horizontal, vertical, or diagonal)\n"
        }
        Variant::ConnectFour => {
            "1. **Choose a column** (1-7) by clicking a link below (or create an issue titled `c4move: 4`)\n\
             2. **Your disc drops to the bottom** of that column\n\
             3. **🔴 and 🟡 alternate**, 🔴 goes first\n\
             4. **First to get 4 in a row wins!** (horizontal, vertical, or diagonal)\n"
        }
    }
}

fn history_label(variant: Variant, record: &MoveRecord) -> String {
    match variant {
        Variant::TicTacToe => record.cell.label(),
        Variant::ConnectFour => (record.cell.column + 1).to_string(),
    }
}

/// Makes free text safe inside one markdown table cell.
fn table_cell(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .replace('|', "\\|")
}

/// The last `limit` moves, newest first. `limit` is at least one.
fn history_table(snapshot: &BoardSnapshot, limit: usize) -> String {
    let variant = snapshot.variant();
    let history = snapshot.history();
    if history.is_empty() {
        return "_No moves yet! Be the first to play._\n".to_string();
    }

    let recent = &history[history.len().saturating_sub(limit)..];
    let with_authors = recent.iter().any(|r| r.author.is_some());
    let target_header = match variant {
        Variant::TicTacToe => "Position",
        Variant::ConnectFour => "Column",
    };

    let mut out = String::new();
    if with_authors {
        let _ = writeln!(out, "| Player | {} | Move # | By |", target_header);
        out.push_str("|:---:|:---:|:---:|:---:|\n");
    } else {
        let _ = writeln!(out, "| Player | {} | Move # |", target_header);
        out.push_str("|:---:|:---:|:---:|\n");
    }
    for record in recent.iter().rev() {
        let _ = write!(
            out,
            "| {} | {} | {} |",
            variant.symbol(record.player),
            history_label(variant, record),
            record.move_number
        );
        if with_authors {
            let author = record.author.as_deref().map_or_else(|| " ".to_string(), table_cell);
            let _ = write!(out, " {} |", author);
        }
        out.push('\n');
    }
    out
}
