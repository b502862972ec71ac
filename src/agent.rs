// Isolation agent with OOP-style API
// Owns the static configuration and exposes the move-selection entry point

use log::{debug, info};
use rand::seq::IndexedRandom;
use std::time::Instant;

use crate::board::Board;
use crate::config::Config;
use crate::search::{alphabeta, SearchContext, SearchTimeout};
use crate::types::{format_move, Cell};

/// Summary of one move decision, for logging and replay comparisons
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchReport {
    /// Deepest search depth that completed before the clock ran out
    pub depth: u32,
    /// Nodes visited across all completed and aborted depths
    pub nodes: u64,
    /// Total decision time
    pub elapsed_ms: u64,
}

/// Game-playing agent: iterative-deepening alpha-beta search under a
/// wall-clock budget
pub struct Agent {
    config: Config,
}

impl Agent {
    /// Creates a new Agent instance with the given configuration
    pub fn new(config: Config) -> Self {
        Agent { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes the best move for the player to move on `board`.
    ///
    /// `time_left` reports the milliseconds remaining before the move must
    /// be returned; it is polled at every search node. The agent keeps
    /// deepening until the remaining time drops below the configured
    /// threshold and then returns the best move of the last fully completed
    /// depth. Returns `None` only when there is no legal move at all.
    pub fn select_move<F: Fn() -> f64>(&self, board: &Board, time_left: F) -> Option<Cell> {
        self.select_move_with_report(board, time_left).0
    }

    /// Like [`select_move`](Agent::select_move), additionally reporting the
    /// depth reached, nodes visited, and time spent
    pub fn select_move_with_report<F: Fn() -> f64>(
        &self,
        board: &Board,
        time_left: F,
    ) -> (Option<Cell>, SearchReport) {
        let started = Instant::now();
        let mover = board.to_move();

        // Safe fallback: any legal move beats forfeiting on a first-ply
        // timeout
        let legal_moves = board.legal_moves(mover);
        let mut best_move = self.fallback_move(&legal_moves);

        let mut report = SearchReport::default();
        let mut ctx = SearchContext::new(
            &time_left,
            self.config.timing.timer_threshold_ms,
            &self.config.heuristic,
            mover,
            self.config.move_selection.randomize_fallback,
        );

        let mut depth = 1u32;
        loop {
            match alphabeta(board, depth, &mut ctx) {
                Ok(mv) => {
                    if mv.is_some() {
                        best_move = mv;
                        report.depth = depth;
                    }
                    debug!("Depth {} complete, best so far {}", depth, format_move(best_move));
                    depth += 1;
                }
                Err(SearchTimeout) => break,
            }
        }

        report.nodes = ctx.nodes;
        report.elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            "Player {}: chose {} (depth: {}, nodes: {}, time: {}ms)",
            mover.as_str(),
            format_move(best_move),
            report.depth,
            report.nodes,
            report.elapsed_ms
        );

        (best_move, report)
    }

    fn fallback_move(&self, legal_moves: &[Cell]) -> Option<Cell> {
        if self.config.move_selection.randomize_fallback {
            legal_moves.choose(&mut rand::rng()).copied()
        } else {
            legal_moves.first().copied()
        }
    }
}
