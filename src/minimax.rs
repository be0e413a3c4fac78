// Minimax agent: bounded-depth adversarial search where every adversary is
// assumed to play the move that is worst for the controlled agent.
//
// One depth unit is a full round (every agent has moved once); the counter
// advances only when control returns to agent 0. Cutoff and terminal
// states are scored by the configured evaluation function.

use log::debug;

use crate::agent::{next_turn, Agent};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Decision};

pub struct MinimaxAgent<S: GameState> {
    config: SearchConfig<S>,
}

impl<S: GameState> MinimaxAgent<S> {
    pub fn new(config: SearchConfig<S>) -> Self {
        MinimaxAgent { config }
    }

    /// Picks the action with the maximal backed-up value. Ties go to the
    /// first action in `legal_actions(0)` order, deterministically.
    pub fn decision(&self, state: &S) -> Result<Decision, SearchError> {
        let legal = state.legal_actions(0);
        if legal.is_empty() {
            return Err(SearchError::EmptyActionSet { agent: 0 });
        }

        let num_agents = state.num_agents();
        let (next_agent, next_depth) = next_turn(0, num_agents, 0);

        let mut best_action = legal[0];
        let mut best_value = f64::NEG_INFINITY;
        for &action in &legal {
            let successor = state.successor(0, action)?;
            let value = self.value(&successor, next_depth, next_agent)?;
            if value > best_value {
                best_value = value;
                best_action = action;
            }
        }

        debug!(
            "minimax: chose {} (value {:.3}, depth {})",
            best_action.as_str(),
            best_value,
            self.config.max_depth
        );

        Ok(Decision {
            action: best_action,
            value: best_value,
        })
    }

    /// Recursive value of `state` with `agent` to move, `depth` full rounds
    /// already completed. All context is explicit in the parameters.
    fn value(&self, state: &S, depth: u32, agent: usize) -> Result<f64, SearchError> {
        if depth == self.config.max_depth || state.is_terminal() {
            return Ok((self.config.eval)(state));
        }

        let num_agents = state.num_agents();
        let legal = state.legal_actions(agent);
        if legal.is_empty() {
            return Err(SearchError::EmptyActionSet { agent });
        }
        let (next_agent, next_depth) = next_turn(agent, num_agents, depth);

        let mut best = if agent == 0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for &action in &legal {
            let successor = state.successor(agent, action)?;
            let value = self.value(&successor, next_depth, next_agent)?;
            best = if agent == 0 {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<Action, SearchError> {
        Ok(self.decision(state)?.action)
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}
