// Core Isolation types shared by the board model, the search engine,
// and the logging/replay tooling

use serde::{Deserialize, Serialize};

/// One of the two players in a game of Isolation
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Converts the player to a string for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "one",
            Player::Two => "two",
        }
    }
}

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// Formats a move for logs and reports. `None` is the no-legal-move sentinel
pub fn format_move(mv: Option<Cell>) -> String {
    match mv {
        Some(cell) => format!("({}, {})", cell.x, cell.y),
        None => "none".to_string(),
    }
}
