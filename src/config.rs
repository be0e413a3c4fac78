// Configuration module for reading Pacbot.toml.
//
// Two layers: the TOML-backed `Config` with the tunables a deployment
// wants to edit without recompiling (search depth, decision logging), and
// the per-agent `SearchConfig` binding a depth to a concrete evaluation
// function handle.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::eval::{score_evaluation, EvalFn};
use crate::state::GameState;

/// Search depth used when nothing else is configured: two full rounds.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchSection,
    pub decision_log: DecisionLogSection,
}

/// Tree-search tunables
#[derive(Debug, Deserialize, Clone)]
pub struct SearchSection {
    /// Maximum search depth in plies; one ply is a complete round in which
    /// every agent acts once.
    pub max_depth: u32,
}

/// Decision logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DecisionLogSection {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Loads default configuration from Pacbot.toml in the project root
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file("Pacbot.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback.
    /// This should match the constants defined in Pacbot.toml.
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchSection {
                max_depth: DEFAULT_MAX_DEPTH,
            },
            decision_log: DecisionLogSection {
                enabled: false,
                log_file_path: "pacbot_decisions.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Pacbot.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

/// Per-agent search configuration: maximum depth plus the evaluation
/// function applied at cutoff and terminal nodes (never per action).
///
/// The evaluation function is a direct handle injected by the caller; there
/// is no runtime lookup by name.
pub struct SearchConfig<S> {
    pub max_depth: u32,
    pub eval: EvalFn<S>,
}

impl<S> SearchConfig<S> {
    pub fn new(max_depth: u32, eval: EvalFn<S>) -> Self {
        SearchConfig { max_depth, eval }
    }
}

impl<S: GameState> SearchConfig<S> {
    /// Depth from a loaded [`Config`], with the default score evaluation.
    pub fn from_config(config: &Config) -> Self {
        SearchConfig::new(config.search.max_depth, score_evaluation::<S>)
    }
}

impl<S: GameState> Default for SearchConfig<S> {
    fn default() -> Self {
        SearchConfig::new(DEFAULT_MAX_DEPTH, score_evaluation::<S>)
    }
}

// fn pointers are Copy regardless of S.
impl<S> Clone for SearchConfig<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SearchConfig<S> {}
