//! "New issue" links that carry a move or reset as the issue title.

use std::fmt::Write as _;

use issue_arcade_engine::{BoardSnapshot, Coord, Target, Variant};

/// Percent-encodes everything except unreserved characters and `:`.
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b':' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

/// Link that opens a new issue with the given title and body.
pub fn issue_link(issues_url: &str, title: &str, body: &str) -> String {
    format!(
        "{}?title={}&body={}",
        issues_url,
        encode_component(title),
        encode_component(body)
    )
}

/// Issue title that plays `target` under the default grammars.
pub fn move_title(variant: Variant, target: Target) -> String {
    match target {
        Target::Cell(index) => {
            let at = Coord::new(index / variant.columns(), index % variant.columns());
            format!("move: {}", at.label())
        }
        Target::Column(column) => format!("c4move: {}", column + 1),
    }
}

/// Clickable move affordances for every legal target.
pub(super) fn move_links(snapshot: &BoardSnapshot, issues_url: &str) -> String {
    let variant = snapshot.variant();
    if snapshot.status().is_terminal() {
        return "_Game is over! Reset to play again._\n\n".to_string();
    }

    let legal = snapshot.legal_targets();
    let mut out = String::new();
    match variant {
        Variant::TicTacToe => {
            let links: Vec<String> = legal
                .iter()
                .map(|&target| {
                    let title = move_title(variant, target);
                    let label = title.trim_start_matches("move: ").to_string();
                    let body = format!("Making a move at {}", label);
                    format!("[**{}**]({})", label, issue_link(issues_url, &title, &body))
                })
                .collect();
            for chunk in links.chunks(variant.columns()) {
                let _ = writeln!(out, "{}\n", chunk.join(" | "));
            }
        }
        Variant::ConnectFour => {
            let links: Vec<String> = (0..variant.columns())
                .map(|column| {
                    let target = Target::Column(column);
                    if legal.contains(&target) {
                        let title = move_title(variant, target);
                        let body = format!("Dropping disc in column {}", column + 1);
                        format!(
                            "[**Column {}**]({})",
                            column + 1,
                            issue_link(issues_url, &title, &body)
                        )
                    } else {
                        format!("~~Column {}~~ (Full)", column + 1)
                    }
                })
                .collect();
            let _ = writeln!(out, "{}\n", links.join(" | "));
        }
    }
    out
}
