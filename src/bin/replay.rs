// Standalone replay tool for analyzing Isolation turn logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --validate             Run validation mode with expected moves
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Agent.toml (default: Agent.toml)

use std::env;
use std::process;

use knights_isolation::config::Config;
use knights_isolation::replay::ReplayEngine;
use knights_isolation::types::Cell;

fn print_usage() {
    eprintln!("Isolation Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --validate <T:X:Y,...>  Validate recorded moves (format: turn:x:y,...)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Agent.toml (default: Agent.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Replay all turns");
    eprintln!("  replay isolation_turns.jsonl --all");
    eprintln!();
    eprintln!("  # Replay specific turns");
    eprintln!("  replay isolation_turns.jsonl --turns 5,10,15");
    eprintln!();
    eprintln!("  # Validate that turn 5 chose cell (3, 4)");
    eprintln!("  replay isolation_turns.jsonl --validate 5:3:4");
}

fn parse_turns(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid turn number: '{}'", t))
        })
        .collect()
}

fn parse_validations(s: &str) -> Result<Vec<(u32, Vec<Cell>)>, String> {
    let mut validations = Vec::new();

    for spec in s.split(',') {
        let parts: Vec<&str> = spec.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(format!(
                "Invalid validation spec '{}' (expected turn:x:y)",
                spec
            ));
        }

        let turn = parts[0]
            .parse::<u32>()
            .map_err(|_| format!("Invalid turn number: '{}'", parts[0]))?;
        let x = parts[1]
            .parse::<i32>()
            .map_err(|_| format!("Invalid x coordinate: '{}'", parts[1]))?;
        let y = parts[2]
            .parse::<i32>()
            .map_err(|_| format!("Invalid y coordinate: '{}'", parts[2]))?;

        validations.push((turn, vec![Cell::new(x, y)]));
    }

    Ok(validations)
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let log_file = &args[1];

    let mut replay_all = false;
    let mut turns: Option<Vec<u32>> = None;
    let mut validations: Option<Vec<(u32, Vec<Cell>)>> = None;
    let mut verbose = false;
    let mut config_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => replay_all = true,
            "--turns" => {
                i += 1;
                match args.get(i).map(|s| parse_turns(s)) {
                    Some(Ok(t)) => turns = Some(t),
                    Some(Err(e)) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                    None => {
                        eprintln!("Error: --turns requires a value");
                        process::exit(1);
                    }
                }
            }
            "--validate" => {
                i += 1;
                match args.get(i).map(|s| parse_validations(s)) {
                    Some(Ok(v)) => validations = Some(v),
                    Some(Err(e)) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                    None => {
                        eprintln!("Error: --validate requires a value");
                        process::exit(1);
                    }
                }
            }
            "--verbose" => verbose = true,
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

    let engine = ReplayEngine::new(config, verbose);

    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(validations) = validations {
        match engine.validate_expected_moves(&entries, &validations) {
            Ok(()) => {
                println!("All {} validations passed", validations.len());
                process::exit(0);
            }
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                process::exit(1);
            }
        }
    }

    let results = if replay_all {
        engine.replay_all(&entries)
    } else if let Some(turns) = turns {
        match engine.replay_turns(&entries, &turns) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Error: one of --all, --turns, or --validate is required");
        print_usage();
        process::exit(1);
    };

    engine.print_report(&results);
}
