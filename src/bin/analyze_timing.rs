// Timing Analysis Tool
//
// Extracts search depth and latency data from turn logs to analyze how the
// time budget is being spent. This helps identify:
// - Average decision times and depths per log
// - Turns that came close to the budget
// - Opportunities to search deeper
//
// Usage:
//   cargo run --release --bin analyze_timing -- <log_file> [log_file ...]

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;

use knights_isolation::turn_logger::TurnRecord;

#[derive(Debug, Clone)]
struct TimingStats {
    log_name: String,
    total_turns: usize,
    avg_latency_ms: f64,
    max_latency_ms: u64,
    min_latency_ms: u64,
    median_latency_ms: f64,
    avg_depth: f64,
}

#[derive(Debug, Clone)]
struct SlowTurn {
    log_name: String,
    turn: u32,
    elapsed_ms: u64,
    search_depth: u32,
    nodes: u64,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <log_file> [log_file ...]", args[0]);
        eprintln!("Example: {} games.jsonl", args[0]);
        process::exit(1);
    }

    println!("═══════════════════════════════════════════════════════════");
    println!("          TIMING ANALYSIS: TURN LOG LATENCIES");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let mut all_stats: Vec<TimingStats> = Vec::new();
    let mut slow_turns: Vec<SlowTurn> = Vec::new();

    for path in &args[1..] {
        match analyze_log(Path::new(path), &mut slow_turns) {
            Ok(stats) => all_stats.push(stats),
            Err(e) => {
                eprintln!("Skipping {}: {}", path, e);
            }
        }
    }

    if all_stats.is_empty() {
        eprintln!("No analyzable logs");
        process::exit(1);
    }

    for stats in &all_stats {
        println!("{}", stats.log_name);
        println!("  Turns:        {}", stats.total_turns);
        println!(
            "  Latency:      avg {:.1}ms, median {:.1}ms, min {}ms, max {}ms",
            stats.avg_latency_ms,
            stats.median_latency_ms,
            stats.min_latency_ms,
            stats.max_latency_ms
        );
        println!("  Search depth: avg {:.1}", stats.avg_depth);
        println!();
    }

    slow_turns.sort_by(|a, b| b.elapsed_ms.cmp(&a.elapsed_ms));
    slow_turns.truncate(10);

    if !slow_turns.is_empty() {
        println!("═══════════════════════════════════════════════════════════");
        println!("                    SLOWEST TURNS");
        println!("═══════════════════════════════════════════════════════════");
        for st in &slow_turns {
            println!(
                "{} turn {}: {}ms (depth: {}, nodes: {})",
                st.log_name, st.turn, st.elapsed_ms, st.search_depth, st.nodes
            );
        }
        println!();
    }
}

fn analyze_log(path: &Path, slow_turns: &mut Vec<SlowTurn>) -> Result<TimingStats, String> {
    let log_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<unnamed>")
        .to_string();

    let file = File::open(path).map_err(|e| format!("Failed to open: {}", e))?;
    let reader = BufReader::new(file);

    let mut latencies: Vec<u64> = Vec::new();
    let mut depths: Vec<u32> = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: TurnRecord = serde_json::from_str(&line)
            .map_err(|e| format!("Failed to parse line {}: {}", line_num + 1, e))?;

        latencies.push(record.elapsed_ms);
        depths.push(record.search_depth);
        slow_turns.push(SlowTurn {
            log_name: log_name.clone(),
            turn: record.turn,
            elapsed_ms: record.elapsed_ms,
            search_depth: record.search_depth,
            nodes: record.nodes,
        });
    }

    if latencies.is_empty() {
        return Err("No turn records found".to_string());
    }

    let total_turns = latencies.len();
    let avg_latency_ms = latencies.iter().sum::<u64>() as f64 / total_turns as f64;
    let max_latency_ms = *latencies.iter().max().unwrap_or(&0);
    let min_latency_ms = *latencies.iter().min().unwrap_or(&0);

    let mut sorted = latencies.clone();
    sorted.sort_unstable();
    let median_latency_ms = if total_turns % 2 == 0 {
        (sorted[total_turns / 2 - 1] + sorted[total_turns / 2]) as f64 / 2.0
    } else {
        sorted[total_turns / 2] as f64
    };

    let avg_depth = depths.iter().map(|&d| d as f64).sum::<f64>() / total_turns as f64;

    Ok(TimingStats {
        log_name,
        total_turns,
        avg_latency_ms,
        max_latency_ms,
        min_latency_ms,
        median_latency_ms,
        avg_depth,
    })
}
