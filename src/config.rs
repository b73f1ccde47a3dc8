//! Deployment configuration: file locations, command vocabulary, page text.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use issue_arcade_engine::{ColumnGrammar, Grammar, PhraseMatch, ResetVocabulary, Variant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "arcade.toml";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV_VAR: &str = "ISSUE_ARCADE_CONFIG";

/// Settings for the generated markdown page.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize)]
#[setters(prefix = "with_", into)]
pub struct PageConfig {
    /// Heading at the top of the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Free text under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    intro: Option<String>,
    /// Base URL for "new issue" links; relative links work from a README.
    issues_url: String,
    /// How many recent moves the history table shows.
    history_limit: usize,
}

impl PageConfig {
    /// Default page settings for a variant.
    #[instrument]
    pub fn for_variant(variant: Variant) -> Self {
        let title = match variant {
            Variant::TicTacToe => "Join the community Tic Tac Toe game!",
            Variant::ConnectFour => "Interactive Connect Four Game!",
        };
        Self {
            title: Some(title.to_string()),
            intro: None,
            issues_url: "../../issues/new".to_string(),
            history_limit: 10,
        }
    }
}

/// Settings for one deployed variant.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize)]
#[setters(prefix = "with_", into)]
pub struct VariantConfig {
    /// Which game these settings drive.
    #[setters(skip)]
    #[serde(skip)]
    variant: Variant,
    /// Snapshot file.
    state_file: PathBuf,
    /// Statistics file.
    stats_file: PathBuf,
    /// Generated markdown page.
    page_file: PathBuf,
    /// Reset trigger phrases, first one is suggested in hints.
    reset_phrases: Vec<String>,
    /// Exact or substring matching of reset phrases.
    reset_match: PhraseMatch,
    /// Strict or permissive column reading (connect-four only).
    column_grammar: ColumnGrammar,
    /// Page rendering settings.
    page: PageConfig,
}

impl VariantConfig {
    /// Default settings for a variant.
    #[instrument]
    pub fn for_variant(variant: Variant) -> Self {
        let (state_file, stats_file, page_file) = match variant {
            Variant::TicTacToe => ("game_state.json", "stats.json", "README.md"),
            Variant::ConnectFour => ("connect4_state.json", "connect4_stats.json", "CONNECT4.md"),
        };
        let vocabulary = ResetVocabulary::for_variant(variant);
        Self {
            variant,
            state_file: state_file.into(),
            stats_file: stats_file.into(),
            page_file: page_file.into(),
            reset_phrases: vocabulary.phrases().to_vec(),
            reset_match: PhraseMatch::Exact,
            column_grammar: ColumnGrammar::Strict,
            page: PageConfig::for_variant(variant),
        }
    }

    /// Builds the command grammar these settings describe.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn grammar(&self) -> Grammar {
        let vocabulary = ResetVocabulary::new(&self.reset_phrases, self.reset_match);
        match self.variant {
            Variant::TicTacToe => Grammar::tictactoe(vocabulary),
            Variant::ConnectFour => Grammar::connect_four(vocabulary, self.column_grammar),
        }
    }

    /// Resolves relative file paths against `base`.
    fn rooted_at(mut self, base: &Path) -> Self {
        for path in [&mut self.state_file, &mut self.stats_file, &mut self.page_file] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    fn merge(mut self, file: VariantFile) -> Self {
        if let Some(v) = file.state_file {
            self.state_file = v;
        }
        if let Some(v) = file.stats_file {
            self.stats_file = v;
        }
        if let Some(v) = file.page_file {
            self.page_file = v;
        }
        if let Some(v) = file.reset_phrases {
            self.reset_phrases = v;
        }
        if let Some(v) = file.reset_match {
            self.reset_match = v;
        }
        if let Some(v) = file.column_grammar {
            self.column_grammar = v;
        }
        if let Some(page) = file.page {
            if page.title.is_some() {
                self.page.title = page.title;
            }
            if page.intro.is_some() {
                self.page.intro = page.intro;
            }
            if let Some(v) = page.issues_url {
                self.page.issues_url = v;
            }
            if let Some(v) = page.history_limit {
                self.page.history_limit = v;
            }
        }
        self
    }
}

/// Settings for both variants.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ArcadeConfig {
    /// Tic-tac-toe settings.
    tictactoe: VariantConfig,
    /// Connect-four settings.
    connect_four: VariantConfig,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            tictactoe: VariantConfig::for_variant(Variant::TicTacToe),
            connect_four: VariantConfig::for_variant(Variant::ConnectFour),
        }
    }
}

impl ArcadeConfig {
    /// Settings for one variant.
    pub fn variant(&self, variant: Variant) -> &VariantConfig {
        match variant {
            Variant::TicTacToe => &self.tictactoe,
            Variant::ConnectFour => &self.connect_four,
        }
    }

    /// Renders the effective configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to encode config: {}", e)))
    }

    /// Parses TOML text. Missing tables and keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        let defaults = Self::default();
        Ok(Self {
            tictactoe: defaults.tictactoe.merge(file.tictactoe.unwrap_or_default()),
            connect_four: defaults.connect_four.merge(file.connect_four.unwrap_or_default()),
        })
    }

    /// Loads configuration from a TOML file. Relative data paths are taken
    /// relative to the file's directory.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        let base = path.as_ref().parent().unwrap_or_else(|| Path::new(""));
        info!("Config loaded successfully");
        Ok(Self {
            tictactoe: config.tictactoe.rooted_at(base),
            connect_four: config.connect_four.rooted_at(base),
        })
    }

    /// Loads the configuration for this run.
    ///
    /// Uses `explicit` when given (it must exist), otherwise the path in
    /// [`CONFIG_ENV_VAR`] (must exist), otherwise [`DEFAULT_CONFIG_FILE`] if
    /// present, otherwise defaults.
    #[instrument]
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!(%path, "Config path taken from environment");
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    tictactoe: Option<VariantFile>,
    connect_four: Option<VariantFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantFile {
    state_file: Option<PathBuf>,
    stats_file: Option<PathBuf>,
    page_file: Option<PathBuf>,
    reset_phrases: Option<Vec<String>>,
    reset_match: Option<PhraseMatch>,
    column_grammar: Option<ColumnGrammar>,
    page: Option<PageFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageFile {
    title: Option<String>,
    intro: Option<String>,
    issues_url: Option<String>,
    history_limit: Option<usize>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_variant() {
        let config = ArcadeConfig::default();
        assert_eq!(config.tictactoe().state_file(), &PathBuf::from("game_state.json"));
        assert_eq!(config.connect_four().page_file(), &PathBuf::from("CONNECT4.md"));
        assert_eq!(*config.connect_four().page().history_limit(), 10);
    }

    #[test]
    fn test_rooted_paths_keep_absolute() {
        let config = VariantConfig::for_variant(Variant::TicTacToe)
            .with_state_file("/var/lib/board.json")
            .rooted_at(Path::new("repo"));
        assert_eq!(config.state_file(), &PathBuf::from("/var/lib/board.json"));
        assert_eq!(config.stats_file(), &PathBuf::from("repo/stats.json"));
    }
}
