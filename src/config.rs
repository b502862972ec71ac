// Configuration module for reading Agent.toml
// All tunable parameters of the Isolation agent live here

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub timing: TimingConfig,
    pub move_selection: MoveSelectionConfig,
    pub heuristic: HeuristicConfig,
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Timing constants for the per-move clock
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    /// Wall-clock budget for one move decision
    pub move_time_budget_ms: u64,
    /// Safety margin reserved for returning and logging the decision
    pub latency_margin_ms: u64,
    /// Remaining-time floor below which the in-flight search depth aborts
    pub timer_threshold_ms: f64,
}

impl TimingConfig {
    /// Computes the effective search budget
    pub fn effective_budget_ms(&self) -> u64 {
        self.move_time_budget_ms
            .saturating_sub(self.latency_margin_ms)
    }
}

/// Fallback-move policy constants
#[derive(Debug, Deserialize, Clone)]
pub struct MoveSelectionConfig {
    /// When true, the pre-search fallback (and frontier candidate) move is
    /// drawn uniformly from the legal moves; when false, the first legal
    /// move in enumeration order is used for reproducible decisions
    pub randomize_fallback: bool,
}

/// Evaluation weights. The defaults reproduce the tuned heuristic; changing
/// them changes search behavior
#[derive(Debug, Deserialize, Clone)]
pub struct HeuristicConfig {
    pub border_penalty: f64,
    pub opponent_border_bonus: f64,
    pub endgame_blank_threshold: usize,
    pub open_opponent_move_weight: f64,
    pub cornered_opponent_move_weight: f64,
    pub trap_bonus_scale: f64,
    pub endgame_own_move_weight: f64,
}

/// Default board geometry for the play binary
#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
}

/// Turn logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Agent.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Agent.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Agent.toml
    pub fn default_hardcoded() -> Self {
        Config {
            timing: TimingConfig {
                move_time_budget_ms: 150,
                latency_margin_ms: 5,
                timer_threshold_ms: 10.0,
            },
            move_selection: MoveSelectionConfig {
                randomize_fallback: true,
            },
            heuristic: HeuristicConfig {
                border_penalty: 5.0,
                opponent_border_bonus: 5.0,
                endgame_blank_threshold: 10,
                open_opponent_move_weight: 2.0,
                cornered_opponent_move_weight: 3.0,
                trap_bonus_scale: 3.0,
                endgame_own_move_weight: 3.0,
            },
            board: BoardConfig {
                width: 7,
                height: 7,
            },
            logging: LoggingConfig {
                enabled: false,
                log_file_path: "isolation_turns.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Agent.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}
