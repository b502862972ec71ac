// Local self-play match runner
//
// Pits the agent against itself on the configured board, logging every
// decision through the turn logger so games can be replayed and analyzed.
//
// Usage:
//   cargo run --release --bin play -- [options]
//
// Options:
//   --games <N>        Number of games to play (default: 1)
//   --config <path>    Path to Agent.toml (default: Agent.toml)
//   --log <path>       Write a JSONL turn log to this path
//   --help             Show this help message

use std::env;
use std::process;

use log::info;

use knights_isolation::agent::Agent;
use knights_isolation::board::Board;
use knights_isolation::clock::TurnClock;
use knights_isolation::config::Config;
use knights_isolation::turn_logger::TurnLogger;
use knights_isolation::types::{Cell, Player};

fn print_usage() {
    eprintln!("Isolation Self-Play Runner");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  play [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --games <N>        Number of games to play (default: 1)");
    eprintln!("  --config <path>    Path to Agent.toml (default: Agent.toml)");
    eprintln!("  --log <path>       Write a JSONL turn log to this path");
    eprintln!("  --help             Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Play a single game");
    eprintln!("  play");
    eprintln!();
    eprintln!("  # Play 10 games and record every turn");
    eprintln!("  play --games 10 --log games.jsonl");
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut games: u32 = 1;
    let mut config_path: Option<String> = None;
    let mut log_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                games = match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) if n > 0 => n,
                    _ => {
                        eprintln!("Error: --games requires a positive number");
                        process::exit(1);
                    }
                };
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(p) => config_path = Some(p.clone()),
                    None => {
                        eprintln!("Error: --config requires a path");
                        process::exit(1);
                    }
                }
            }
            "--log" => {
                i += 1;
                match args.get(i) {
                    Some(p) => log_path = Some(p.clone()),
                    None => {
                        eprintln!("Error: --log requires a path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown option '{}'", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match Config::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Config::load_or_default(),
    };

    let mut logger = match &log_path {
        Some(path) => TurnLogger::new(true, path),
        None => TurnLogger::new(config.logging.enabled, &config.logging.log_file_path),
    };

    let agent = Agent::new(config.clone());

    let mut wins_one = 0u32;
    let mut wins_two = 0u32;
    let mut total_turns = 0u32;
    let mut turn_counter = 0u32;

    for game_idx in 0..games {
        // Alternate the first mover so neither side gets a standing
        // first-move advantage across the match
        let first = if game_idx % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        let board = match starting_board(&config, first) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };

        let (winner, turns) = run_game(&agent, board, &mut logger, &mut turn_counter);
        total_turns += turns;
        match winner {
            Player::One => wins_one += 1,
            Player::Two => wins_two += 1,
        }

        info!(
            "Game {}: player {} wins after {} turns",
            game_idx + 1,
            winner.as_str(),
            turns
        );
    }

    println!("\n═══════════════════════════════════════════════════════════");
    println!("                    MATCH SUMMARY");
    println!("═══════════════════════════════════════════════════════════");
    println!("Games Played:   {}", games);
    println!("Player One:     {} wins", wins_one);
    println!("Player Two:     {} wins", wins_two);
    println!(
        "Average Length: {:.1} turns",
        total_turns as f64 / games as f64
    );
    println!("═══════════════════════════════════════════════════════════");
}

/// Fresh board with the players in opposite corners
fn starting_board(config: &Config, first: Player) -> Result<Board, String> {
    let width = config.board.width;
    let height = config.board.height;
    Board::new(
        width,
        height,
        Cell::new(0, 0),
        Cell::new(width - 1, height - 1),
        first,
    )
}

/// Plays one game to completion, returning the winner and the turn count
fn run_game(
    agent: &Agent,
    mut board: Board,
    logger: &mut TurnLogger,
    turn_counter: &mut u32,
) -> (Player, u32) {
    let budget = agent.config().timing.effective_budget_ms();
    let mut turns = 0u32;

    loop {
        let mover = board.to_move();
        let clock = TurnClock::start(budget);
        let (mv, report) = agent.select_move_with_report(&board, move || clock.remaining_ms());

        logger.log_turn(*turn_counter, &board, mv, &report);
        *turn_counter += 1;

        match mv {
            Some(cell) => {
                board = board.apply_move(cell);
                turns += 1;
            }
            None => {
                // The mover is walled in and loses
                return (mover.opponent(), turns);
            }
        }
    }
}
