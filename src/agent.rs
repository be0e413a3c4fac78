use crate::error::SearchError;
use crate::state::GameState;
use crate::types::Action;

/// Common interface for all action-selection policies.
///
/// `choose_action` takes `&mut self` because some policies (the reflex
/// agent's random tie-break) carry internal RNG state; the tree-search
/// agents are stateless between calls.
pub trait Agent<S: GameState> {
    /// Select an action for the controlled agent (index 0) on `state`.
    ///
    /// Fails with [`SearchError::EmptyActionSet`] if the controlled agent
    /// has no legal actions, and propagates [`SearchError::InvalidAction`]
    /// from the environment unchanged.
    fn choose_action(&mut self, state: &S) -> Result<Action, SearchError>;

    /// Display name for logging.
    fn name(&self) -> &'static str;
}

/// Advances the turn order: after the last agent in the round has acted,
/// control returns to agent 0 and one full ply has been completed. With a
/// single agent the controlled agent's own move completes the round.
pub(crate) fn next_turn(agent: usize, num_agents: usize, depth: u32) -> (usize, u32) {
    if agent + 1 >= num_agents {
        (0, depth + 1)
    } else {
        (agent + 1, depth)
    }
}
