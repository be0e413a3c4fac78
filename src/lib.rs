//! Bounded-depth adversarial search for turn-based multi-agent grid games.
//!
//! Agent 0 is the controlled agent; agents 1..N-1 are adversaries in fixed
//! turn order. The environment's state representation stays behind the
//! [`GameState`]/[`PacmanView`] traits; this crate supplies the policies
//! that pick agent 0's next action:
//!
//! - [`ReflexAgent`] — one-ply lookahead over the reflex heuristic,
//! - [`MinimaxAgent`] — depth-bounded minimax,
//! - [`AlphaBetaAgent`] — minimax with alpha-beta pruning (identical
//!   choices, less work),
//! - [`ExpectimaxAgent`] — uniform-random opponent model.
//!
//! Cutoff and terminal nodes are scored by a pluggable evaluation function
//! ([`score_evaluation`] by default, [`better_evaluation`] for a deeper
//! multi-feature heuristic), configured through [`SearchConfig`].

pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod decision_log;
pub mod error;
pub mod eval;
pub mod expectimax;
pub mod minimax;
pub mod reflex;
pub mod state;
pub mod types;

pub use agent::Agent;
pub use alphabeta::AlphaBetaAgent;
pub use config::{Config, SearchConfig};
pub use decision_log::DecisionLogger;
pub use error::{ConfigError, SearchError};
pub use eval::{better_evaluation, reflex_evaluation, score_evaluation, EvalFn};
pub use expectimax::ExpectimaxAgent;
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;
pub use state::{GameState, PacmanView};
pub use types::{manhattan_distance, Action, Coord, Decision, GhostInfo};
