// Turn logging module for recording game decisions
//
// Each decision is appended as one JSON object per line (JSONL) so games
// can be replayed and analyzed offline. Writes happen after the
// deadline-bound decision has already been made, so plain synchronous file
// I/O is sufficient. Logging failures are reported and swallowed; they
// must never cost a game.

use log::error;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;

use crate::agent::SearchReport;
use crate::board::Board;
use crate::types::{Cell, Player};

/// A single logged decision: the board as the mover saw it, the chosen
/// move, and the search statistics behind it
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TurnRecord {
    pub turn: u32,
    pub mover: Player,
    pub chosen_move: Option<Cell>,
    pub board: Board,
    pub search_depth: u32,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub timestamp: String,
}

/// JSONL writer for move decisions
pub struct TurnLogger {
    file: Option<File>,
}

impl TurnLogger {
    /// Creates a new turn logger.
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return TurnLogger { file: None };
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Turn logging enabled: {}", log_file_path);
                TurnLogger { file: Some(file) }
            }
            Err(e) => {
                error!("Failed to create turn log file '{}': {}", log_file_path, e);
                TurnLogger { file: None }
            }
        }
    }

    /// Creates a disabled turn logger (no-op)
    pub fn disabled() -> Self {
        TurnLogger { file: None }
    }

    /// Appends one decision to the log. `board` is the state the decision
    /// was made on, before the move was applied.
    pub fn log_turn(
        &mut self,
        turn: u32,
        board: &Board,
        chosen_move: Option<Cell>,
        report: &SearchReport,
    ) {
        let file = match self.file.as_mut() {
            Some(file) => file,
            None => return,
        };

        let record = TurnRecord {
            turn,
            mover: board.to_move(),
            chosen_move,
            board: board.clone(),
            search_depth: report.depth,
            nodes: report.nodes,
            elapsed_ms: report.elapsed_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match serde_json::to_string(&record) {
            Ok(json_line) => {
                if let Err(e) = writeln!(file, "{}", json_line) {
                    error!("Failed to write turn log entry: {}", e);
                } else if let Err(e) = file.flush() {
                    error!("Failed to flush turn log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize turn log entry: {}", e);
            }
        }
    }
}
