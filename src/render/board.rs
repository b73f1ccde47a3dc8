//! Board grids for markdown pages and terminals.

use std::fmt::Write as _;

use issue_arcade_engine::{BoardSnapshot, Coord, Square, Variant};

fn cell(variant: Variant, square: Square, empty: &str) -> String {
    match square {
        Square::Empty => empty.to_string(),
        Square::Occupied(player) => variant.symbol(player).to_string(),
    }
}

/// Markdown table of the board.
///
/// Tic-tac-toe labels columns `A`.. and rows `1`..; connect-four labels
/// columns `1`.. only.
pub fn markdown_grid(snapshot: &BoardSnapshot) -> String {
    let variant = snapshot.variant();
    let grid = snapshot.cells();
    let mut out = String::from("| |");
    for column in 0..grid.column_count() {
        let label = match variant {
            Variant::TicTacToe => Coord::new(0, column).label()[..1].to_string(),
            Variant::ConnectFour => (column + 1).to_string(),
        };
        let _ = write!(out, "{}|", label);
    }
    out.push('\n');
    out.push('|');
    out.push_str(&":---:|".repeat(grid.column_count() + 1));
    out.push('\n');

    for (index, row) in grid.rows().iter().enumerate() {
        match variant {
            Variant::TicTacToe => {
                let _ = write!(out, "|**{}**|", index + 1);
            }
            Variant::ConnectFour => out.push_str("| |"),
        }
        for square in row {
            let _ = write!(out, "{}|", cell(variant, *square, " "));
        }
        out.push('\n');
    }
    out
}

/// Box-drawn (tic-tac-toe) or spaced (connect-four) plain-text board.
pub fn text_grid(snapshot: &BoardSnapshot) -> String {
    let variant = snapshot.variant();
    let grid = snapshot.cells();
    let mut out = String::new();
    match variant {
        Variant::TicTacToe => {
            out.push_str("     A   B   C\n");
            out.push_str("   ┌───┬───┬───┐\n");
            for (index, row) in grid.rows().iter().enumerate() {
                let _ = write!(out, " {} │", index + 1);
                for square in row {
                    let _ = write!(out, " {} │", cell(variant, *square, "·"));
                }
                out.push('\n');
                if index + 1 < grid.row_count() {
                    out.push_str("   ├───┼───┼───┤\n");
                }
            }
            out.push_str("   └───┴───┴───┘\n");
        }
        Variant::ConnectFour => {
            let header: Vec<String> = (1..=grid.column_count()).map(|c| format!("{:^2}", c)).collect();
            let _ = writeln!(out, "{}", header.join(" "));
            for row in grid.rows() {
                let cells: Vec<String> = row
                    .iter()
                    .map(|square| match square {
                        Square::Empty => "· ".to_string(),
                        Square::Occupied(_) => cell(variant, *square, "·"),
                    })
                    .collect();
                let _ = writeln!(out, "{}", cells.join(" "));
            }
        }
    }
    out
}
