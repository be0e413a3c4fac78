// Shared test doubles for the integration tests.
//
// `ScriptedTree` is an explicit game tree with prescribed transitions and
// leaf scores, for pinning down search-order properties (pruning
// equivalence, tie-breaks, terminal short-circuits) without any game
// semantics in the way.
//
// `TinyMaze` is a minimal Pacman-like environment with arcade-style
// score bookkeeping (-1 per controlled move, +10 per food, +/-500 on
// win/lose, scared timers from capsules), for end-to-end agent behavior.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use pacbot::{Action, Coord, GameState, GhostInfo, PacmanView, SearchError};

pub fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

/*===================================== ScriptedTree =====================================*/

#[derive(Debug, PartialEq)]
struct TreeSpec {
    num_agents: usize,
    // (node, agent) -> ordered (action, child) pairs
    edges: HashMap<(u32, usize), Vec<(Action, u32)>>,
    scores: HashMap<u32, f64>,
    wins: HashSet<u32>,
    loses: HashSet<u32>,
}

/// Builder for a scripted game tree rooted at node 0.
pub struct TreeBuilder {
    spec: TreeSpec,
}

impl TreeBuilder {
    pub fn new(num_agents: usize) -> Self {
        TreeBuilder {
            spec: TreeSpec {
                num_agents,
                edges: HashMap::new(),
                scores: HashMap::new(),
                wins: HashSet::new(),
                loses: HashSet::new(),
            },
        }
    }

    /// Declares that `agent` may take `action` at `node`, reaching `child`.
    /// Edge insertion order is the legal-action order.
    pub fn edge(mut self, node: u32, agent: usize, action: Action, child: u32) -> Self {
        self.spec
            .edges
            .entry((node, agent))
            .or_default()
            .push((action, child));
        self
    }

    pub fn score(mut self, node: u32, value: f64) -> Self {
        self.spec.scores.insert(node, value);
        self
    }

    pub fn win(mut self, node: u32) -> Self {
        self.spec.wins.insert(node);
        self
    }

    pub fn lose(mut self, node: u32) -> Self {
        self.spec.loses.insert(node);
        self
    }

    pub fn build(self) -> ScriptedTree {
        ScriptedTree {
            spec: Arc::new(self.spec),
            node: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedTree {
    spec: Arc<TreeSpec>,
    node: u32,
}

impl ScriptedTree {
    pub fn node(&self) -> u32 {
        self.node
    }
}

impl GameState for ScriptedTree {
    fn legal_actions(&self, agent: usize) -> Vec<Action> {
        self.spec
            .edges
            .get(&(self.node, agent))
            .map(|pairs| pairs.iter().map(|&(a, _)| a).collect())
            .unwrap_or_default()
    }

    fn successor(&self, agent: usize, action: Action) -> Result<Self, SearchError> {
        let child = self
            .spec
            .edges
            .get(&(self.node, agent))
            .and_then(|pairs| pairs.iter().find(|&&(a, _)| a == action))
            .map(|&(_, c)| c)
            .ok_or(SearchError::InvalidAction { agent, action })?;
        Ok(ScriptedTree {
            spec: Arc::clone(&self.spec),
            node: child,
        })
    }

    fn num_agents(&self) -> usize {
        self.spec.num_agents
    }

    fn is_win(&self) -> bool {
        self.spec.wins.contains(&self.node)
    }

    fn is_lose(&self) -> bool {
        self.spec.loses.contains(&self.node)
    }

    fn score(&self) -> f64 {
        self.spec.scores.get(&self.node).copied().unwrap_or(0.0)
    }
}

/*======================================= TinyMaze =======================================*/

/// Scared timer granted by eating a capsule, in agent moves.
const CAPSULE_SCARED_MOVES: u32 = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct TinyMaze {
    pub width: i32,
    pub height: i32,
    pub walls: HashSet<Coord>,
    pub pacman: Coord,
    pub food: Vec<Coord>,
    pub capsules: Vec<Coord>,
    pub ghosts: Vec<GhostInfo>,
    pub score: f64,
    pub lost: bool,
}

impl TinyMaze {
    /// An open (wall-free) board of the given size with pacman at `pacman`.
    pub fn open(width: i32, height: i32, pacman: Coord) -> Self {
        TinyMaze {
            width,
            height,
            walls: HashSet::new(),
            pacman,
            food: vec![],
            capsules: vec![],
            ghosts: vec![],
            score: 0.0,
            lost: false,
        }
    }

    pub fn with_wall(mut self, x: i32, y: i32) -> Self {
        self.walls.insert(Coord { x, y });
        self
    }

    pub fn with_food(mut self, x: i32, y: i32) -> Self {
        self.food.push(Coord { x, y });
        self
    }

    pub fn with_capsule(mut self, x: i32, y: i32) -> Self {
        self.capsules.push(Coord { x, y });
        self
    }

    pub fn with_ghost(mut self, x: i32, y: i32) -> Self {
        self.ghosts.push(GhostInfo {
            position: Coord { x, y },
            scared_timer: 0,
        });
        self
    }

    fn passable(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height && !self.walls.contains(&c)
    }

    fn resolve_pacman_arrival(&mut self) {
        let pos = self.pacman;

        if let Some(i) = self.capsules.iter().position(|&c| c == pos) {
            self.capsules.remove(i);
            for ghost in &mut self.ghosts {
                ghost.scared_timer = CAPSULE_SCARED_MOVES;
            }
        }

        if let Some(i) = self.food.iter().position(|&f| f == pos) {
            self.food.remove(i);
            self.score += 10.0;
            if self.food.is_empty() {
                self.score += 500.0;
            }
        }

        for gi in 0..self.ghosts.len() {
            if self.ghosts[gi].position == pos {
                if self.ghosts[gi].scared_timer > 0 {
                    self.score += 200.0;
                } else {
                    self.lost = true;
                    self.score -= 500.0;
                }
            }
        }
    }
}

impl GameState for TinyMaze {
    fn legal_actions(&self, agent: usize) -> Vec<Action> {
        if self.is_terminal() {
            return vec![];
        }
        if agent == 0 {
            Action::all()
                .iter()
                .filter(|a| self.passable(a.apply(&self.pacman)))
                .copied()
                .collect()
        } else {
            let pos = self.ghosts[agent - 1].position;
            let moves: Vec<Action> = Action::all()
                .iter()
                .filter(|&&a| a != Action::Stop && self.passable(a.apply(&pos)))
                .copied()
                .collect();
            if moves.is_empty() {
                // A boxed-in ghost waits rather than having no move at all.
                vec![Action::Stop]
            } else {
                moves
            }
        }
    }

    fn successor(&self, agent: usize, action: Action) -> Result<Self, SearchError> {
        if !self.legal_actions(agent).contains(&action) {
            return Err(SearchError::InvalidAction { agent, action });
        }

        let mut next = self.clone();
        if agent == 0 {
            next.pacman = action.apply(&self.pacman);
            next.score -= 1.0;
            next.resolve_pacman_arrival();
        } else {
            let gi = agent - 1;
            next.ghosts[gi].position = action.apply(&self.ghosts[gi].position);
            if next.ghosts[gi].scared_timer > 0 {
                next.ghosts[gi].scared_timer -= 1;
            }
            if next.ghosts[gi].position == next.pacman {
                if next.ghosts[gi].scared_timer > 0 {
                    next.score += 200.0;
                } else {
                    next.lost = true;
                    next.score -= 500.0;
                }
            }
        }
        Ok(next)
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn is_win(&self) -> bool {
        self.food.is_empty() && !self.lost
    }

    fn is_lose(&self) -> bool {
        self.lost
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanView for TinyMaze {
    fn pacman_position(&self) -> Coord {
        self.pacman
    }

    fn food(&self) -> Vec<Coord> {
        self.food.clone()
    }

    fn ghosts(&self) -> Vec<GhostInfo> {
        self.ghosts.clone()
    }

    fn capsules(&self) -> Vec<Coord> {
        self.capsules.clone()
    }
}
