// Expectimax agent: same skeleton as minimax, but adversaries are modeled
// as choosing uniformly at random among their legal moves, so adversary
// nodes back up the arithmetic mean of their children instead of the
// minimum. Useful against opponents that are stochastic rather than
// optimal.

use log::debug;

use crate::agent::{next_turn, Agent};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Decision};

pub struct ExpectimaxAgent<S: GameState> {
    config: SearchConfig<S>,
}

impl<S: GameState> ExpectimaxAgent<S> {
    pub fn new(config: SearchConfig<S>) -> Self {
        ExpectimaxAgent { config }
    }

    /// Picks the action with the maximal expected value; first occurrence
    /// wins ties.
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
            "expectimax: chose {} (expected value {:.3}, depth {})",
            best_action.as_str(),
            best_value,
            self.config.max_depth
        );

        Ok(Decision {
            action: best_action,
            value: best_value,
        })
    }

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

        if agent == 0 {
            let mut best = f64::NEG_INFINITY;
            for &action in &legal {
                let successor = state.successor(agent, action)?;
                best = best.max(self.value(&successor, next_depth, next_agent)?);
            }
            Ok(best)
        } else {
            // Uniform chance node: every legal move is equally likely.
            let mut total = 0.0;
            for &action in &legal {
                let successor = state.successor(agent, action)?;
                total += self.value(&successor, next_depth, next_agent)?;
            }
            Ok(total / legal.len() as f64)
        }
    }
}

impl<S: GameState> Agent<S> for ExpectimaxAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<Action, SearchError> {
        Ok(self.decision(state)?.action)
    }

    fn name(&self) -> &'static str {
        "Expectimax"
    }
}
