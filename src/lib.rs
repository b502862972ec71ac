// Library exports for the Isolation agent
// This allows the play, replay, and analysis tools to use the core logic

pub mod agent;
pub mod board;
pub mod clock;
pub mod config;
pub mod eval;
pub mod replay;
pub mod search;
pub mod turn_logger;
pub mod types;
