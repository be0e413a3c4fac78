use std::path::PathBuf;

use crate::types::Action;

/// Errors surfaced by the search core.
///
/// All variants are environment/caller contract violations, not expected
/// runtime conditions: the search either completes deterministically or
/// propagates one of these to its caller. There is no retry policy.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// A successor was requested for an action that is not currently legal
    /// for the given agent. Raised by `GameState::successor` implementations
    /// and propagated unchanged.
    #[error("action {action:?} is not legal for agent {agent}")]
    InvalidAction { agent: usize, action: Action },

    /// An agent had zero legal actions in a non-terminal state. This means
    /// the terminal predicates and the action generator disagree; surfaced
    /// rather than silently defaulting to Stop.
    #[error("agent {agent} has no legal actions in a non-terminal state")]
    EmptyActionSet { agent: usize },

    /// A heuristic was asked to aggregate over an empty collection where its
    /// formula defines no fallback. The built-in heuristics guard these
    /// cases themselves; state implementations may still raise it for
    /// inputs outside the documented contract.
    #[error("degenerate heuristic input: {0}")]
    DegenerateHeuristicInput(&'static str),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
