//! Issue Arcade library - issue-driven board games persisted as JSON
//!
//! Each run takes one free-text instruction (typically an issue title),
//! applies it to the stored board, and reports a one-line status. A separate
//! step regenerates a markdown page from the stored board.
//!
//! # Architecture
//!
//! - **Engine** ([`issue_arcade_engine`]): pure rules and command grammar
//! - **Store**: JSON snapshot and statistics files behind [`StateStore`]
//! - **Runner**: parse, apply, persist, report ([`TurnRunner`])
//! - **Render**: markdown page and terminal board
//! - **Config**: file locations, vocabulary, and page text from TOML
//!
//! # Example
//!
//! ```
//! use issue_arcade::{MemoryStore, TurnRunner, Variant, VariantConfig};
//!
//! let config = VariantConfig::for_variant(Variant::ConnectFour);
//! let mut runner = TurnRunner::new(Variant::ConnectFour, config.grammar(), MemoryStore::new(Variant::ConnectFour));
//! let report = runner.handle("c4move: 4", Some("octocat")).unwrap();
//! assert_eq!(report.message(), "Move successful! Next player: 🟡");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod render;
mod runner;
mod store;

// Crate-level exports - Configuration
pub use config::{ArcadeConfig, CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, PageConfig, VariantConfig};

// Crate-level exports - Rendering
pub use render::{encode_component, issue_link, markdown_grid, move_title, render_page, render_text, text_grid};

// Crate-level exports - Turn handling
pub use runner::{Outcome, Report, TurnRunner};

// Crate-level exports - Storage
pub use store::{JsonFileStore, MemoryStore, StateStore, Stats, StoreError};

// Crate-level exports - Game types
pub use issue_arcade_engine::{
    BoardSnapshot, ColumnGrammar, Command, Coord, GameStatus, Grammar, MoveError, MoveRecord, PhraseMatch,
    Player, ResetVocabulary, Square, Target, Variant,
};
