//! Free-text command grammar.
//!
//! An issue title is lower-cased, trimmed, and offered to an ordered list of
//! [`Rule`]s. The first rule that recognises it decides the [`Command`]; when
//! none does the title is [`Command::Unrecognized`]. Parsing never fails and
//! has no side effects.

use super::{Target, Variant};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What an instruction asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a fresh game.
    Reset,
    /// Place a mark at, or drop a piece into, the target.
    Move(Target),
    /// Matches no rule; callers show a usage hint and change nothing.
    Unrecognized,
}

/// How reset phrases are compared against an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseMatch {
    /// The whole instruction must equal a phrase.
    #[default]
    Exact,
    /// A phrase anywhere in the instruction is enough.
    Substring,
}

/// How connect-four columns are read out of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnGrammar {
    /// Only the text after a labelled prefix (or the bare instruction) counts.
    #[default]
    Strict,
    /// The first number anywhere in the instruction counts.
    Permissive,
}

/// Allow-list of reset trigger phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetVocabulary {
    phrases: Vec<String>,
    matching: PhraseMatch,
}

impl ResetVocabulary {
    /// Creates a vocabulary. Phrases are normalised like instructions; blank
    /// phrases are dropped.
    pub fn new<I, P>(phrases: I, matching: PhraseMatch) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases, matching }
    }

    /// Default phrases for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::TicTacToe => Self::new(["reset"], PhraseMatch::Exact),
            Variant::ConnectFour => Self::new(
                ["c4reset", "reset connect4", "reset c4", "reset"],
                PhraseMatch::Exact,
            ),
        }
    }

    /// Normalised phrases, in the order given.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The phrase to suggest in hints.
    pub fn primary(&self) -> Option<&str> {
        self.phrases.first().map(String::as_str)
    }

    fn matches(&self, instruction: &str) -> bool {
        self.phrases.iter().any(|phrase| match self.matching {
            PhraseMatch::Exact => instruction == phrase,
            PhraseMatch::Substring => instruction.contains(phrase.as_str()),
        })
    }
}

/// One pattern matcher in a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Reset trigger phrases.
    Reset(ResetVocabulary),
    /// Column letter then row digit (`b2`), after an optional `prefix`.
    Coordinate {
        /// Optional label stripped before matching, e.g. `move:`.
        prefix: String,
        /// Board width; letters `a..` up to this many.
        columns: usize,
        /// Board height; digits `1..=rows`.
        rows: usize,
    },
    /// A bare zero-based cell index in `[0, cells)`, after an optional `prefix`.
    LinearIndex {
        /// Optional label stripped before matching.
        prefix: String,
        /// Number of cells.
        cells: usize,
    },
    /// A 1-based column after the first matching labelled prefix, or the
    /// whole instruction when no prefix is present.
    LabelledColumn {
        /// Labels tried in order, e.g. `c4move:` then `move:`.
        prefixes: Vec<String>,
        /// Board width.
        columns: usize,
    },
    /// The first run of digits anywhere, read as a 1-based column.
    EmbeddedColumn {
        /// Board width.
        columns: usize,
    },
}

impl Rule {
    /// Tries this rule against a normalised instruction.
    fn apply(&self, instruction: &str) -> Option<Command> {
        match self {
            Rule::Reset(vocabulary) => vocabulary.matches(instruction).then_some(Command::Reset),
            Rule::Coordinate { prefix, columns, rows } => {
                let token = after_prefix(instruction, prefix);
                let mut chars = token.chars();
                let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
                    (Some(letter), Some(digit), None) => (letter, digit),
                    _ => return None,
                };
                let column = letter_index(letter).filter(|&c| c < *columns)?;
                let row = digit
                    .to_digit(10)
                    .map(|d| d as usize)
                    .filter(|&d| (1..=*rows).contains(&d))?
                    - 1;
                Some(Command::Move(Target::Cell(row * columns + column)))
            }
            Rule::LinearIndex { prefix, cells } => after_prefix(instruction, prefix)
                .parse::<usize>()
                .ok()
                .filter(|index| index < cells)
                .map(|index| Command::Move(Target::Cell(index))),
            Rule::LabelledColumn { prefixes, columns } => {
                let token = prefixes
                    .iter()
                    .filter(|p| !p.is_empty())
                    .find_map(|p| instruction.split_once(p.as_str()).map(|(_, rest)| rest.trim()))
                    .unwrap_or(instruction);
                column_command(token, *columns)
            }
            Rule::EmbeddedColumn { columns } => {
                column_command(standalone_number(instruction)?, *columns)
            }
        }
    }
}

/// Ordered list of rules for one deployed variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    /// Creates a grammar from rules in priority order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Default grammar for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::TicTacToe => Self::tictactoe(ResetVocabulary::for_variant(variant)),
            Variant::ConnectFour => {
                Self::connect_four(ResetVocabulary::for_variant(variant), ColumnGrammar::Strict)
            }
        }
    }

    /// Reset phrases, then `move: b2` coordinates, then bare indices `0..9`.
    pub fn tictactoe(reset: ResetVocabulary) -> Self {
        let variant = Variant::TicTacToe;
        Self::new(vec![
            Rule::Reset(reset),
            Rule::Coordinate {
                prefix: "move:".to_string(),
                columns: variant.columns(),
                rows: variant.rows(),
            },
            Rule::LinearIndex {
                prefix: "move:".to_string(),
                cells: variant.cell_count(),
            },
        ])
    }

    /// Reset phrases, then columns `1..=7` read per `columns`.
    pub fn connect_four(reset: ResetVocabulary, columns: ColumnGrammar) -> Self {
        let width = Variant::ConnectFour.columns();
        let column_rule = match columns {
            ColumnGrammar::Strict => Rule::LabelledColumn {
                prefixes: vec!["c4move:".to_string(), "move:".to_string()],
                columns: width,
            },
            ColumnGrammar::Permissive => Rule::EmbeddedColumn { columns: width },
        };
        Self::new(vec![Rule::Reset(reset), column_rule])
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The reset phrase to suggest in hints, if the grammar has one.
    pub fn reset_phrase(&self) -> Option<&str> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Reset(vocabulary) => vocabulary.primary(),
            _ => None,
        })
    }

    /// Classifies an instruction.
    #[instrument(skip(self))]
    pub fn parse(&self, instruction: &str) -> Command {
        let normalized = normalize(instruction);
        let command = self
            .rules
            .iter()
            .find_map(|rule| rule.apply(&normalized))
            .unwrap_or(Command::Unrecognized);
        debug!(?command, "Instruction classified");
        command
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Text after the first occurrence of `prefix`, or the whole instruction.
fn after_prefix<'a>(instruction: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return instruction;
    }
    instruction
        .split_once(prefix)
        .map_or(instruction, |(_, rest)| rest.trim())
}

/// First run of digits that is not glued to a preceding letter, so the `4`
/// in `c4move:` is never read as a column.
fn standalone_number(text: &str) -> Option<&str> {
    let mut previous: Option<char> = None;
    for (start, c) in text.char_indices() {
        if c.is_ascii_digit() && !previous.is_some_and(char::is_alphanumeric) {
            let end = text[start..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(text.len(), |len| start + len);
            return Some(&text[start..end]);
        }
        previous = Some(c);
    }
    None
}

fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

fn column_command(token: &str, columns: usize) -> Option<Command> {
    token
        .parse::<usize>()
        .ok()
        .filter(|column| (1..=columns).contains(column))
        .map(|column| Command::Move(Target::Column(column - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_with_and_without_prefix() {
        let grammar = Grammar::for_variant(Variant::TicTacToe);
        assert_eq!(grammar.parse("move: b2"), Command::Move(Target::Cell(4)));
        assert_eq!(grammar.parse("C3"), Command::Move(Target::Cell(8)));
        assert_eq!(grammar.parse("move:a3"), Command::Move(Target::Cell(6)));
    }

    #[test]
    fn test_coordinate_out_of_alphabet() {
        let grammar = Grammar::for_variant(Variant::TicTacToe);
        assert_eq!(grammar.parse("move: d1"), Command::Unrecognized);
        assert_eq!(grammar.parse("move: a4"), Command::Unrecognized);
        assert_eq!(grammar.parse("move: a0"), Command::Unrecognized);
    }

    #[test]
    fn test_linear_index_fallback() {
        let grammar = Grammar::for_variant(Variant::TicTacToe);
        assert_eq!(grammar.parse("move: 0"), Command::Move(Target::Cell(0)));
        assert_eq!(grammar.parse("8"), Command::Move(Target::Cell(8)));
        assert_eq!(grammar.parse("9"), Command::Unrecognized);
        assert_eq!(grammar.parse("-1"), Command::Unrecognized);
    }

    #[test]
    fn test_strict_column_ignores_numbers_before_prefix() {
        let grammar = Grammar::for_variant(Variant::ConnectFour);
        assert_eq!(grammar.parse("c4move: 4"), Command::Move(Target::Column(3)));
        assert_eq!(grammar.parse("move: 7"), Command::Move(Target::Column(6)));
        assert_eq!(grammar.parse("2"), Command::Move(Target::Column(1)));
        assert_eq!(grammar.parse("round 3 c4move: 5"), Command::Move(Target::Column(4)));
        assert_eq!(grammar.parse("drop in 3 please"), Command::Unrecognized);
        assert_eq!(grammar.parse("c4move: 9"), Command::Unrecognized);
        assert_eq!(grammar.parse("c4move: 0"), Command::Unrecognized);
    }

    #[test]
    fn test_permissive_column_takes_first_number() {
        let grammar = Grammar::connect_four(
            ResetVocabulary::for_variant(Variant::ConnectFour),
            ColumnGrammar::Permissive,
        );
        assert_eq!(grammar.parse("drop in 3 please"), Command::Move(Target::Column(2)));
        assert_eq!(grammar.parse("c4move: 12"), Command::Unrecognized);
        assert_eq!(grammar.parse("c4move: 1"), Command::Move(Target::Column(0)));
        assert_eq!(grammar.parse("c4move:6"), Command::Move(Target::Column(5)));
        assert_eq!(grammar.parse("no digits"), Command::Unrecognized);
        assert_eq!(grammar.parse("c4"), Command::Unrecognized);
    }

    #[test]
    fn test_reset_exact_and_substring() {
        let exact = Grammar::for_variant(Variant::ConnectFour);
        assert_eq!(exact.parse("  Reset C4 "), Command::Reset);
        assert_eq!(exact.parse("please reset"), Command::Unrecognized);

        let substring = Grammar::tictactoe(ResetVocabulary::new(["reset"], PhraseMatch::Substring));
        assert_eq!(substring.parse("please reset the board"), Command::Reset);
    }

    #[test]
    fn test_blank_phrases_never_match() {
        let vocabulary = ResetVocabulary::new(["", "  "], PhraseMatch::Substring);
        assert!(vocabulary.phrases().is_empty());
        let grammar = Grammar::tictactoe(vocabulary);
        assert_eq!(grammar.parse("anything"), Command::Unrecognized);
        assert_eq!(grammar.reset_phrase(), None);
    }

    #[test]
    fn test_reset_phrase_hint() {
        assert_eq!(Grammar::for_variant(Variant::ConnectFour).reset_phrase(), Some("c4reset"));
        assert_eq!(Grammar::for_variant(Variant::TicTacToe).reset_phrase(), Some("reset"));
    }
}
