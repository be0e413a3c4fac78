// Alpha-beta agent: minimax with window pruning. For every input it must
// choose exactly the action MinimaxAgent would; pruning only reduces the
// work performed.
//
// Pruning uses strict inequalities (v > beta at maximizer nodes, v < alpha
// at minimizer nodes). This is deliberate and load-bearing: it decides
// which equal-valued branches are still explored, so a >=/<= variant would
// change running time even though the returned value stays the same.

use log::debug;

use crate::agent::{next_turn, Agent};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Decision};

pub struct AlphaBetaAgent<S: GameState> {
    config: SearchConfig<S>,
}

impl<S: GameState> AlphaBetaAgent<S> {
    pub fn new(config: SearchConfig<S>) -> Self {
        AlphaBetaAgent { config }
    }

    /// Picks the action with the maximal backed-up value, threading alpha
    /// through the top-level action loop. First occurrence wins ties,
    /// matching MinimaxAgent.
    pub fn decision(&self, state: &S) -> Result<Decision, SearchError> {
        let legal = state.legal_actions(0);
        if legal.is_empty() {
            return Err(SearchError::EmptyActionSet { agent: 0 });
        }

        let num_agents = state.num_agents();
        let (next_agent, next_depth) = next_turn(0, num_agents, 0);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_action = legal[0];
        let mut best_value = f64::NEG_INFINITY;
        for &action in &legal {
            let successor = state.successor(0, action)?;
            let value = self.value(&successor, next_depth, next_agent, alpha, beta)?;
            if value > best_value {
                best_value = value;
                best_action = action;
            }
            alpha = alpha.max(best_value);
        }

        debug!(
            "alphabeta: chose {} (value {:.3}, depth {})",
            best_action.as_str(),
            best_value,
            self.config.max_depth
        );

        Ok(Decision {
            action: best_action,
            value: best_value,
        })
    }

    fn value(
        &self,
        state: &S,
        depth: u32,
        agent: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<f64, SearchError> {
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
            let mut alpha = alpha;
            let mut v = f64::NEG_INFINITY;
            for &action in &legal {
                let successor = state.successor(agent, action)?;
                v = v.max(self.value(&successor, next_depth, next_agent, alpha, beta)?);
                if v > beta {
                    return Ok(v);
                }
                alpha = alpha.max(v);
            }
            Ok(v)
        } else {
            let mut beta = beta;
            let mut v = f64::INFINITY;
            for &action in &legal {
                let successor = state.successor(agent, action)?;
                v = v.min(self.value(&successor, next_depth, next_agent, alpha, beta)?);
                if v < alpha {
                    return Ok(v);
                }
                beta = beta.min(v);
            }
            Ok(v)
        }
    }
}

impl<S: GameState> Agent<S> for AlphaBetaAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<Action, SearchError> {
        Ok(self.decision(state)?.action)
    }

    fn name(&self) -> &'static str {
        "AlphaBeta"
    }
}
