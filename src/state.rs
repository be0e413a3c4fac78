// External state interface.
//
// The search core never owns or mutates game state; it only asks the
// environment for legal actions and successor snapshots through these
// traits. Everything the environment does internally (maze geometry,
// collision rules, score bookkeeping) stays on the other side of this seam.

use crate::error::SearchError;
use crate::types::{Action, Coord, GhostInfo};

/// The narrow interface the tree-search agents require from a game state.
///
/// Contract:
/// - `legal_actions` returns a deterministic, stable ordering; the search
///   agents' tie-breaks depend on it.
/// - `successor` is pure and side-effect-free, and fails with
///   [`SearchError::InvalidAction`] for an action that is not currently
///   legal for that agent.
/// - `is_win` and `is_lose` are mutually exclusive.
/// - agent index 0 is the controlled agent; 1..num_agents are adversaries
///   in fixed turn order.
pub trait GameState: Clone {
    fn legal_actions(&self, agent: usize) -> Vec<Action>;

    fn successor(&self, agent: usize, action: Action) -> Result<Self, SearchError>;

    /// Total number of agents, at least 1 (the controlled agent).
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// True when the state is a win or lose state; search stops here and
    /// evaluates directly regardless of remaining depth.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Collected game score; higher is better for the controlled agent.
    fn score(&self) -> f64;
}

/// Feature accessors consumed by the evaluation heuristics.
///
/// Tree search itself needs only [`GameState`]; states that should work
/// with [`reflex_evaluation`](crate::eval::reflex_evaluation) and
/// [`better_evaluation`](crate::eval::better_evaluation) implement this
/// extension as well.
pub trait PacmanView: GameState {
    /// Current position of the controlled agent.
    fn pacman_position(&self) -> Coord;

    /// Coordinates of all remaining food items.
    fn food(&self) -> Vec<Coord>;

    /// Position and scared timer for every adversary.
    fn ghosts(&self) -> Vec<GhostInfo>;

    /// Coordinates of all remaining power capsules.
    fn capsules(&self) -> Vec<Coord>;
}
