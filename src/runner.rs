//! One-shot turn handling: parse, apply, persist, report.

use derive_new::new;
use issue_arcade_engine::{BoardSnapshot, Command, GameStatus, Grammar, MoveError, Variant};
use tracing::{debug, info, instrument, warn};

use crate::config::VariantConfig;
use crate::store::{JsonFileStore, StateStore, StoreError};

/// What a handled instruction did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The board was replaced with a fresh one.
    Reset,
    /// A move was accepted; carries the status after the move.
    Moved(GameStatus),
    /// A recognised move broke a rule; nothing was written.
    Rejected(MoveError),
    /// The instruction matched no rule; nothing was written.
    Unrecognized,
}

/// Result of one run: the status line and what happened.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Report {
    message: String,
    outcome: Outcome,
}

impl Report {
    /// One-line, human-readable status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What the instruction did.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// True when the stored snapshot was replaced.
    pub fn changed_state(&self) -> bool {
        matches!(self.outcome, Outcome::Reset | Outcome::Moved(_))
    }
}

/// Applies one instruction per run against a store.
#[derive(Debug)]
pub struct TurnRunner<S> {
    variant: Variant,
    grammar: Grammar,
    store: S,
}

impl TurnRunner<JsonFileStore> {
    /// Creates a runner over a variant's configured JSON files.
    #[instrument(skip(config), fields(variant = %config.variant()))]
    pub fn from_config(config: &VariantConfig) -> Self {
        Self::new(*config.variant(), config.grammar(), JsonFileStore::from_config(config))
    }
}

impl<S: StateStore> TurnRunner<S> {
    /// Creates a runner.
    pub fn new(variant: Variant, grammar: Grammar, store: S) -> Self {
        Self {
            variant,
            grammar,
            store,
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the runner, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Handles one instruction, optionally attributed to a player identity.
    ///
    /// Rejected and unrecognised instructions are not errors: they produce a
    /// report explaining the problem and leave storage untouched. Only
    /// storage failures are returned as `Err`.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn handle(&mut self, instruction: &str, author: Option<&str>) -> Result<Report, StoreError> {
        let author = author.map(str::trim).filter(|a| !a.is_empty());
        match self.grammar.parse(instruction) {
            Command::Reset => self.reset(),
            Command::Move(target) => {
                let snapshot = self.store.load()?;
                match snapshot.apply_move(target, author) {
                    Ok(next) => self.commit(&next, author),
                    Err(err) => {
                        warn!(%err, ?target, "Move rejected");
                        Ok(Report::new(self.rejection_message(&err), Outcome::Rejected(err)))
                    }
                }
            }
            Command::Unrecognized => {
                debug!("Instruction not recognised");
                Ok(Report::new(self.usage_hint(), Outcome::Unrecognized))
            }
        }
    }

    /// Overwrites whatever is stored, so a damaged state file can be recovered.
    fn reset(&mut self) -> Result<Report, StoreError> {
        let fresh = BoardSnapshot::new(self.variant);
        self.store.save(&fresh)?;
        info!("Board reset");
        let message = format!("Game reset! {} starts.", self.variant.symbol(fresh.turn()));
        Ok(Report::new(message, Outcome::Reset))
    }

    fn commit(&mut self, next: &BoardSnapshot, author: Option<&str>) -> Result<Report, StoreError> {
        self.store.save(next)?;

        let mut stats = self.store.load_stats()?;
        stats.record_move(author);
        if next.status().is_terminal() {
            stats.record_completion();
        }
        self.store.save_stats(&stats)?;

        let status = *next.status();
        info!(move_count = next.move_count(), ?status, "Move accepted");
        let reset = self.reset_phrase();
        let message = match status {
            GameStatus::Won(winner) => format!(
                "{} wins! Create an issue with '{}' to play again.",
                self.variant.symbol(winner),
                reset
            ),
            GameStatus::Draw => format!(
                "Game ended in a draw! Create an issue with '{}' to play again.",
                reset
            ),
            GameStatus::InProgress => format!(
                "Move successful! Next player: {}",
                self.variant.symbol(next.turn())
            ),
        };
        Ok(Report::new(message, Outcome::Moved(status)))
    }

    fn reset_phrase(&self) -> &str {
        self.grammar.reset_phrase().unwrap_or("reset")
    }

    fn rejection_message(&self, err: &MoveError) -> String {
        match err {
            MoveError::GameOver => format!(
                "{} Create an issue with '{}' to start a new game.",
                err,
                self.reset_phrase()
            ),
            MoveError::InvalidTarget { .. } => match self.variant {
                Variant::TicTacToe => format!("{} Use 0-8 or A1-C3.", err),
                Variant::ConnectFour => format!("{} Choose 1-{}.", err, self.variant.columns()),
            },
            MoveError::CellOccupied { .. } | MoveError::ColumnFull { .. } => err.to_string(),
        }
    }

    fn usage_hint(&self) -> String {
        match self.variant {
            Variant::TicTacToe => format!(
                "Invalid move format. Use 'move: A1' format or '{}' to restart.",
                self.reset_phrase()
            ),
            Variant::ConnectFour => format!(
                "Invalid move format. Use 'c4move: 4' (column 1-{}) or '{}' to restart.",
                self.variant.columns(),
                self.reset_phrase()
            ),
        }
    }
}
