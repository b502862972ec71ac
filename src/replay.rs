// Replay module for analyzing historical game decisions
//
// This module provides functionality to:
// 1. Parse JSONL turn logs
// 2. Re-run the agent on historical board states
// 3. Compare expected vs actual moves
// 4. Generate detailed analysis reports

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::agent::Agent;
use crate::board::Board;
use crate::clock::TurnClock;
use crate::config::Config;
use crate::turn_logger::TurnRecord;
use crate::types::{format_move, Cell};

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: u32,
    pub original_move: Option<Cell>,
    pub replayed_move: Option<Cell>,
    pub matches: bool,
    pub search_depth: u32,
    pub nodes: u64,
    pub computation_time_ms: u64,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
    pub avg_depth: f64,
    pub avg_time_ms: f64,
}

/// Replay engine for analyzing turn logs
pub struct ReplayEngine {
    agent: Agent,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine {
            agent: Agent::new(config),
            verbose,
        }
    }

    /// Loads all turn records from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<TurnRecord>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: TurnRecord = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} turn records", entries.len());
        Ok(entries)
    }

    /// Re-runs the agent on a single board state under the configured
    /// budget, returning the move, search depth, nodes, and decision time
    pub fn replay_turn(&self, board: &Board) -> (Option<Cell>, u32, u64, u64) {
        let budget = self.agent.config().timing.effective_budget_ms();
        let clock = TurnClock::start(budget);

        let (mv, report) = self
            .agent
            .select_move_with_report(board, move || clock.remaining_ms());
        (mv, report.depth, report.nodes, report.elapsed_ms)
    }

    /// Replays a single turn record and compares the result
    pub fn replay_entry(&self, entry: &TurnRecord) -> ReplayResult {
        if self.verbose {
            info!("Replaying turn {}...", entry.turn);
        }

        let (replayed_move, search_depth, nodes, computation_time_ms) =
            self.replay_turn(&entry.board);

        let matches = entry.chosen_move == replayed_move;

        if self.verbose {
            if matches {
                info!(
                    "Turn {}: MATCH - {} (depth: {}, time: {}ms)",
                    entry.turn,
                    format_move(replayed_move),
                    search_depth,
                    computation_time_ms
                );
            } else {
                warn!(
                    "Turn {}: MISMATCH - Original: {}, Replayed: {} (depth: {}, time: {}ms)",
                    entry.turn,
                    format_move(entry.chosen_move),
                    format_move(replayed_move),
                    search_depth,
                    computation_time_ms
                );
            }
        }

        ReplayResult {
            turn: entry.turn,
            original_move: entry.chosen_move,
            replayed_move,
            matches,
            search_depth,
            nodes,
            computation_time_ms,
        }
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[TurnRecord]) -> Vec<ReplayResult> {
        entries.iter().map(|e| self.replay_entry(e)).collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[TurnRecord],
        turn_numbers: &[u32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            results.push(self.replay_entry(entry));
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };
        let (avg_depth, avg_time_ms) = if total_turns > 0 {
            (
                results.iter().map(|r| r.search_depth as f64).sum::<f64>() / total_turns as f64,
                results
                    .iter()
                    .map(|r| r.computation_time_ms as f64)
                    .sum::<f64>()
                    / total_turns as f64,
            )
        } else {
            (0.0, 0.0)
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
            avg_depth,
            avg_time_ms,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            println!("Average Search Depth:       {:.1}", stats.avg_depth);
            println!("Average Computation Time:   {:.1}ms\n", stats.avg_time_ms);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Turn {}: {} → {} (depth: {}, time: {}ms)",
                    result.turn,
                    format_move(result.original_move),
                    format_move(result.replayed_move),
                    result.search_depth,
                    result.computation_time_ms
                );
            }
            println!();
        }
    }

    /// Validates that specific recorded moves match expectations
    pub fn validate_expected_moves(
        &self,
        entries: &[TurnRecord],
        expected_moves: &[(u32, Vec<Cell>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            let actual = entry
                .chosen_move
                .ok_or_else(|| format!("Turn {}: no move was recorded", turn))?;

            if !acceptable.contains(&actual) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable
                        .iter()
                        .map(|c| format_move(Some(*c)))
                        .collect::<Vec<_>>(),
                    format_move(Some(actual))
                ));
            }
        }

        Ok(())
    }
}
