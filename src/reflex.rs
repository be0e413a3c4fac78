// Reflex agent: a depth-0 policy that scores each one-ply successor with
// the reflex heuristic and picks the best, breaking ties uniformly at
// random. No recursion and no opponent modeling; ghosts influence the
// choice only through the heuristic features.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;
use crate::error::SearchError;
use crate::eval::reflex_evaluation;
use crate::state::PacmanView;
use crate::types::{Action, Decision};

pub struct ReflexAgent {
    rng: StdRng,
}

impl ReflexAgent {
    pub fn new() -> Self {
        ReflexAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic tie-breaking for tests and replays: the same seed and
    /// the same states yield the same action sequence.
    pub fn with_seed(seed: u64) -> Self {
        ReflexAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks the best action together with its heuristic score.
    pub fn decision<S: PacmanView>(&mut self, state: &S) -> Result<Decision, SearchError> {
        let legal = state.legal_actions(0);
        if legal.is_empty() {
            return Err(SearchError::EmptyActionSet { agent: 0 });
        }

        let mut scores = Vec::with_capacity(legal.len());
        for &action in &legal {
            let successor = state.successor(0, action)?;
            scores.push(reflex_evaluation(&successor));
        }

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // All indices achieving the maximum, sampled uniformly -- not
        // merely the first.
        let tied: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
        let chosen = tied[self.rng.random_range(0..tied.len())];

        debug!(
            "reflex: chose {} (score {:.3}, {} tied of {})",
            legal[chosen].as_str(),
            best,
            tied.len(),
            legal.len()
        );

        Ok(Decision {
            action: legal[chosen],
            value: best,
        })
    }
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PacmanView> Agent<S> for ReflexAgent {
    fn choose_action(&mut self, state: &S) -> Result<Action, SearchError> {
        Ok(self.decision(state)?.action)
    }

    fn name(&self) -> &'static str {
        "Reflex"
    }
}
