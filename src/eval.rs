// State evaluation heuristics.
//
// All heuristics are pure functions from a state to an f64 desirability
// score, higher better for the controlled agent. Terminal-looking
// situations are reported through extreme-but-finite sentinel constants
// rather than f64 infinities, so that comparing, negating and averaging
// heuristic values (expectimax chance nodes) can never produce NaN or
// overflow.

use crate::state::{GameState, PacmanView};
use crate::types::manhattan_distance;

/// Evaluation function handle stored in a
/// [`SearchConfig`](crate::config::SearchConfig). A direct function
/// reference, resolved at construction time by the caller.
pub type EvalFn<S> = fn(&S) -> f64;

/// Sentinel for the reflex heuristic: board cleared, goal reached.
pub const REFLEX_WIN_SCORE: f64 = 100_000.0;
/// Sentinel for the reflex heuristic: a ghost is close enough to capture.
pub const REFLEX_LOSS_SCORE: f64 = -100_000.0;

/// Sentinel for the deep heuristic's "goal reached" branches.
pub const EVAL_WIN_SCORE: f64 = 1.0e9;
/// Sentinel for the deep heuristic's "imminent capture" branch.
pub const EVAL_LOSS_SCORE: f64 = -1.0e9;

/// Ghosts at or inside this Manhattan distance are treated as an imminent
/// capture threat by both heuristics.
const GHOST_DANGER_DISTANCE: i32 = 2;

/// Default cutoff evaluation: the raw game score of the state.
///
/// This is the evaluation the search agents use unless the caller injects
/// another; it makes depth-D search optimize exactly the environment's own
/// scoring.
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}

/// One-ply reflex heuristic. Scores a successor state directly.
///
/// Rewards aggregate proximity to the remaining food, mildly rewards
/// distance to the nearest ghost, and scales the raw game score by an
/// inverse-remaining-food factor so score improvements weigh more as the
/// board clears. With zero adversaries the ghost terms contribute nothing.
pub fn reflex_evaluation<S: PacmanView>(successor: &S) -> f64 {
    let pos = successor.pacman_position();

    let food_dists: Vec<i32> = successor
        .food()
        .iter()
        .map(|&f| manhattan_distance(pos, f))
        .collect();
    let ghost_dists: Vec<i32> = successor
        .ghosts()
        .iter()
        .map(|g| manhattan_distance(pos, g.position))
        .collect();

    if food_dists.is_empty() {
        return REFLEX_WIN_SCORE;
    }
    let min_ghost = ghost_dists.iter().copied().min();
    if let Some(d) = min_ghost {
        if d < GHOST_DANGER_DISTANCE {
            return REFLEX_LOSS_SCORE;
        }
    }

    let food_sum = food_dists.iter().sum::<i32>() as f64;
    let ghost_term = min_ghost.unwrap_or(0) as f64;

    -food_sum + ghost_term + successor.score() * (10.0 + 10.0 / food_sum)
}

/// Deep multi-feature heuristic, usable as the cutoff evaluation for any of
/// the tree-search agents. Evaluates a state directly (no candidate action).
///
/// Branches are checked in precedence order; each earlier branch guards the
/// divisions and min/sum aggregations of the later ones. An empty capsule
/// list contributes zero penalty (the formula is otherwise undefined there),
/// and an empty ghost list counts as "no near threat".
pub fn better_evaluation<S: PacmanView>(state: &S) -> f64 {
    let pos = state.pacman_position();
    let ghosts = state.ghosts();

    let food_dists: Vec<i32> = state
        .food()
        .iter()
        .map(|&f| manhattan_distance(pos, f))
        .collect();
    let ghost_dists: Vec<i32> = ghosts
        .iter()
        .map(|g| manhattan_distance(pos, g.position))
        .collect();
    let capsule_dists: Vec<i32> = state
        .capsules()
        .iter()
        .map(|&c| manhattan_distance(pos, c))
        .collect();

    // 1. Goal reached.
    if food_dists.is_empty() {
        return EVAL_WIN_SCORE;
    }

    // 2. Immediate danger dominates all other features.
    let min_ghost = ghost_dists.iter().copied().min();
    if let Some(d) = min_ghost {
        if d < GHOST_DANGER_DISTANCE {
            return EVAL_LOSS_SCORE;
        }
    }

    // 3. Standing on a capsule: force the pickup.
    let min_capsule = capsule_dists.iter().copied().min();
    if min_capsule == Some(0) {
        return EVAL_WIN_SCORE;
    }

    let food_sum = food_dists.iter().sum::<i32>() as f64;
    let food_min = *food_dists.iter().min().unwrap_or(&0) as f64;
    let score_term = state.score() * (100.0 + 10.0 / food_sum);
    let capsule_term = 10.0 * min_capsule.unwrap_or(0) as f64;

    // 4. Endgame (little total food left) and sparse-board (nearest food
    //    far away) regimes share one formula.
    if food_sum < 10.0 || food_min > 10.0 {
        return -10.0 * food_sum - 55.0 * food_min + 100.0 + score_term;
    }

    // 5. No near threat, or every ghost is currently scared.
    let all_scared = !ghosts.is_empty() && ghosts.iter().all(|g| g.scared_timer > 0);
    let no_near_threat = match min_ghost {
        Some(d) => d > 5,
        None => true,
    };
    if no_near_threat || all_scared {
        return -10.0 * food_sum - 15.0 * food_min - 5.0 * food_min + 100.0 + score_term
            - capsule_term;
    }

    // 6. A ghost is nearby and dangerous: back off the food weights and pay
    //    attention to ghost distance. min_ghost is present here, branch 5
    //    handled the ghost-free case.
    let ghost_term = min_ghost.unwrap_or(0) as f64;
    -5.0 * food_sum + 10.0 * ghost_term - 30.0 * food_min + score_term - capsule_term
}
