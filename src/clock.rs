// Wall-clock budget tracking for a single move decision
//
// The agent itself only consumes a remaining-milliseconds closure; this
// helper is how the binaries, the replay engine, and tests produce one.

use std::time::Instant;

/// Counts down a fixed wall-clock budget from the moment it is started
#[derive(Debug, Clone)]
pub struct TurnClock {
    started: Instant,
    budget_ms: u64,
}

impl TurnClock {
    /// Starts the clock with the given budget
    pub fn start(budget_ms: u64) -> Self {
        TurnClock {
            started: Instant::now(),
            budget_ms,
        }
    }

    /// Milliseconds left before the move must be returned.
    /// Goes negative once the budget is overrun. Cheap enough to call once
    /// per search node.
    pub fn remaining_ms(&self) -> f64 {
        self.budget_ms as f64 - self.started.elapsed().as_secs_f64() * 1000.0
    }
}
