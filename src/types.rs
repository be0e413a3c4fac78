// Core value types shared by the search agents and heuristics.
//
// States, successor generation and legal-move filtering live behind the
// traits in `state.rs`; everything here is plain data.

use serde::{Deserialize, Serialize};

/// 2D grid coordinate
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Manhattan distance between two coordinates
pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The five possible moves for any agent: four cardinal directions plus Stop.
///
/// Actions are opaque tokens as far as the search is concerned; only the
/// environment (via `GameState::legal_actions`) decides which are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// Returns all possible actions
    pub fn all() -> [Action; 5] {
        [Action::North, Action::South, Action::East, Action::West, Action::Stop]
    }

    /// Converts the action to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::North => "north",
            Action::South => "south",
            Action::East => "east",
            Action::West => "west",
            Action::Stop => "stop",
        }
    }

    /// Calculates the coordinate reached by taking this action from `coord`
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Action::North => Coord { x: coord.x, y: coord.y + 1 },
            Action::South => Coord { x: coord.x, y: coord.y - 1 },
            Action::East => Coord { x: coord.x + 1, y: coord.y },
            Action::West => Coord { x: coord.x - 1, y: coord.y },
            Action::Stop => *coord,
        }
    }
}

/// Per-adversary view exposed to the heuristics: where the ghost is and how
/// long it remains scared (0 = dangerous).
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct GhostInfo {
    pub position: Coord,
    pub scared_timer: u32,
}

/// A chosen action together with the value that backed it up.
///
/// Search agents expose this through `decision()`; `choose_action` drops
/// the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub value: f64,
}
