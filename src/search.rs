// Depth-limited minimax search with alpha-beta pruning
//
// Two mutually recursive layers walk the game tree: `max_value` acts for
// the searching player, `min_value` for the opponent. Both check the clock
// before doing anything else; once the remaining time drops below the
// threshold, `SearchTimeout` unwinds through every active call via `?` and
// the iterative-deepening driver falls back to the last completed depth.
// Pruning bounds are passed by value and only ever narrow with depth.

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::config::HeuristicConfig;
use crate::eval;
use crate::types::{Cell, Player};

/// Cooperative-cancellation signal: the clock ran out mid-search.
/// Absorbed by the iterative-deepening driver, never surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimeout;

/// Per-search state shared by both layers: the clock, the evaluation
/// weights, the identity of the searching player, and node statistics
pub struct SearchContext<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
    weights: &'a HeuristicConfig,
    player: Player,
    randomize: bool,
    rng: ThreadRng,
    /// Nodes visited across all depths of the current decision
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    /// Builds a context for one move decision. `player` is the side the
    /// search maximizes for, normally the player to move at the root.
    pub fn new(
        time_left: &'a dyn Fn() -> f64,
        threshold_ms: f64,
        weights: &'a HeuristicConfig,
        player: Player,
        randomize: bool,
    ) -> Self {
        SearchContext {
            time_left,
            threshold_ms,
            weights,
            player,
            randomize,
            rng: rand::rng(),
            nodes: 0,
        }
    }

    /// The side this context searches for
    pub fn player(&self) -> Player {
        self.player
    }

    fn check_clock(&self) -> Result<(), SearchTimeout> {
        if (self.time_left)() < self.threshold_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Picks the placeholder candidate move reported before any child has
    /// been searched. Only its legality matters; which legal move is chosen
    /// is a policy knob.
    fn candidate(&mut self, moves: &[Cell]) -> Option<Cell> {
        if self.randomize {
            moves.choose(&mut self.rng).copied()
        } else {
            moves.first().copied()
        }
    }
}

/// Top-level search entry: runs a depth-limited alpha-beta search and
/// returns the best move found, or `None` when the player to move has no
/// legal move (or when `depth` is 0, where no move can be recommended)
pub fn alphabeta(
    board: &Board,
    depth: u32,
    ctx: &mut SearchContext,
) -> Result<Option<Cell>, SearchTimeout> {
    ctx.check_clock()?;

    if depth == 0 {
        return Ok(None);
    }

    let (_, best_move) = max_value(board, depth, f64::NEG_INFINITY, f64::INFINITY, ctx)?;
    Ok(best_move)
}

/// Maximizing layer: the searching player acts.
///
/// Returns the backed-up score for the searching player together with the
/// move achieving it. A state with no legal moves is terminal regardless of
/// depth and yields the board's utility; depth 0 yields the static
/// evaluation. Ties between equal-scoring moves go to the later one in
/// enumeration order.
pub fn max_value(
    board: &Board,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    ctx: &mut SearchContext,
) -> Result<(f64, Option<Cell>), SearchTimeout> {
    ctx.check_clock()?;
    ctx.nodes += 1;

    let moves = board.legal_moves(board.to_move());
    if moves.is_empty() {
        return Ok((board.utility(ctx.player), None));
    }

    let mut best_move = ctx.candidate(&moves);
    if depth == 0 {
        return Ok((eval::score(board, ctx.player, ctx.weights), best_move));
    }

    let mut best_score = f64::NEG_INFINITY;
    for mv in moves {
        let (value, _) = min_value(&board.apply_move(mv), depth - 1, alpha, beta, ctx)?;
        if value >= best_score {
            best_score = value;
            best_move = Some(mv);
        }
        if best_score >= beta {
            return Ok((best_score, best_move));
        }
        alpha = alpha.max(best_score);
    }

    Ok((best_score, best_move))
}

/// Minimizing layer: the opponent acts. Mirror image of `max_value`.
pub fn min_value(
    board: &Board,
    depth: u32,
    alpha: f64,
    mut beta: f64,
    ctx: &mut SearchContext,
) -> Result<(f64, Option<Cell>), SearchTimeout> {
    ctx.check_clock()?;
    ctx.nodes += 1;

    let moves = board.legal_moves(board.to_move());
    if moves.is_empty() {
        return Ok((board.utility(ctx.player), None));
    }

    let mut best_move = ctx.candidate(&moves);
    if depth == 0 {
        return Ok((eval::score(board, ctx.player, ctx.weights), best_move));
    }

    let mut best_score = f64::INFINITY;
    for mv in moves {
        let (value, _) = max_value(&board.apply_move(mv), depth - 1, alpha, beta, ctx)?;
        if value <= best_score {
            best_score = value;
            best_move = Some(mv);
        }
        if best_score <= alpha {
            return Ok((best_score, best_move));
        }
        beta = beta.min(best_score);
    }

    Ok((best_score, best_move))
}
