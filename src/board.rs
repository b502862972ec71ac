// Isolation board model
//
// The board is an immutable value type: applying a move produces a new board
// and leaves the receiver untouched, so search branches can never interfere
// with each other. Each player occupies one cell and moves like a chess
// knight; every cell a player has ever occupied stays blocked for the rest
// of the game. The player to move with no legal move loses.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Player};

/// Relative knight-move offsets, in the enumeration order used for
/// legal-move generation (and therefore for search tie-breaking)
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Snapshot of a game of Isolation
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major occupancy map; true for every cell that has been visited
    /// (including both players' current cells)
    blocked: Vec<bool>,
    player_one: Cell,
    player_two: Cell,
    to_move: Player,
}

impl Board {
    /// Creates a fresh board with both players already placed.
    ///
    /// Both starting cells count as visited. Returns an error if the
    /// dimensions are non-positive, a starting cell is out of bounds, or the
    /// players share a cell.
    pub fn new(
        width: i32,
        height: i32,
        player_one: Cell,
        player_two: Cell,
        to_move: Player,
    ) -> Result<Board, String> {
        if width <= 0 || height <= 0 {
            return Err(format!("Invalid board dimensions: {}x{}", width, height));
        }

        let mut board = Board {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            player_one,
            player_two,
            to_move,
        };

        if !board.in_bounds(player_one) || !board.in_bounds(player_two) {
            return Err(format!(
                "Starting cells ({}, {}) / ({}, {}) out of bounds for {}x{} board",
                player_one.x, player_one.y, player_two.x, player_two.y, width, height
            ));
        }
        if player_one == player_two {
            return Err("Players cannot start on the same cell".to_string());
        }

        let one_idx = board.index(player_one);
        let two_idx = board.index(player_two);
        board.blocked[one_idx] = true;
        board.blocked[two_idx] = true;
        Ok(board)
    }

    /// Creates a board with additional pre-blocked cells, for scenario
    /// construction in analysis tools and tests
    pub fn with_blocked(
        width: i32,
        height: i32,
        blocked: &[Cell],
        player_one: Cell,
        player_two: Cell,
        to_move: Player,
    ) -> Result<Board, String> {
        let mut board = Board::new(width, height, player_one, player_two, to_move)?;
        for &cell in blocked {
            if !board.in_bounds(cell) {
                return Err(format!(
                    "Blocked cell ({}, {}) out of bounds for {}x{} board",
                    cell.x, cell.y, width, height
                ));
            }
            let idx = board.index(cell);
            board.blocked[idx] = true;
        }
        Ok(board)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The player whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current cell of the given player
    pub fn player_location(&self, player: Player) -> Cell {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Number of cells never visited by either player
    pub fn blank_space_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Whether the cell has been visited by either player
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[self.index(cell)]
    }

    /// Legal knight moves for the given player, in a fixed enumeration order.
    /// Empty when the player is fully walled in.
    pub fn legal_moves(&self, player: Player) -> Vec<Cell> {
        let from = self.player_location(player);
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| Cell::new(from.x + dx, from.y + dy))
            .filter(|&cell| self.in_bounds(cell) && !self.is_blocked(cell))
            .collect()
    }

    /// Applies a move for the player to move, returning the resulting board.
    /// The receiver is not modified. The vacated cell stays blocked.
    pub fn apply_move(&self, cell: Cell) -> Board {
        debug_assert!(
            self.in_bounds(cell) && !self.is_blocked(cell),
            "apply_move called with illegal move ({}, {})",
            cell.x,
            cell.y
        );

        let mut next = self.clone();
        let idx = next.index(cell);
        next.blocked[idx] = true;
        match next.to_move {
            Player::One => next.player_one = cell,
            Player::Two => next.player_two = cell,
        }
        next.to_move = next.to_move.opponent();
        next
    }

    /// A player has lost when it is their turn and they cannot move
    pub fn is_loser(&self, player: Player) -> bool {
        self.to_move == player && self.legal_moves(player).is_empty()
    }

    /// A player has won when the opponent is to move and cannot
    pub fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.to_move == opponent && self.legal_moves(opponent).is_empty()
    }

    /// Terminal value of this state for the given player: positive infinity
    /// for a win, negative infinity for a loss, zero otherwise
    pub fn utility(&self, player: Player) -> f64 {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }
}
