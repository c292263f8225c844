//! gridworld-sweep: measure sweeps-to-convergence across square grid sizes.
//!
//! Runs a fresh model per size from 2 up to --max-size (goal in the far
//! corner) and prints the ordered (size, sweeps) table. The counts grow
//! linearly: the synchronous update propagates information one cell per
//! sweep, so an n×n grid needs at least 2(n−1) sweeps.

use std::time::Instant;

use gridworld::config::SolverConfig;
use gridworld::sweep::{
    convergence_sweep, convergence_sweep_parallel, DEFAULT_MAX_SWEEP_SIZE, MIN_SWEEP_SIZE,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut max_size: usize = DEFAULT_MAX_SWEEP_SIZE;
    let mut config = SolverConfig::default();
    let mut parallel = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-size" => {
                i += 1;
                max_size = args[i].parse().expect("Invalid --max-size");
            }
            "--gamma" => {
                i += 1;
                config.discount = args[i].parse().expect("Invalid --gamma");
            }
            "--threshold" => {
                i += 1;
                config.threshold = args[i].parse().expect("Invalid --threshold");
            }
            "--parallel" => {
                parallel = true;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let t0 = Instant::now();
    let result = if parallel {
        convergence_sweep_parallel(max_size, config)
    } else {
        convergence_sweep(max_size, config)
    };
    let points = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&points).expect("Failed to serialize sweep points")
        );
        return;
    }

    println!("=== gridworld-sweep ===");
    println!(
        "Sizes {}..={} | gamma={} | threshold={}{}",
        MIN_SWEEP_SIZE,
        max_size,
        config.discount,
        config.threshold,
        if parallel { " | parallel" } else { "" }
    );
    println!();
    println!(" size | sweeps");
    println!("------|-------");
    for point in &points {
        println!(" {:>4} | {:>6}", point.size, point.sweeps);
    }
    println!("\n{} grids in {:.2} ms.", points.len(), elapsed_ms);
}

fn print_usage() {
    println!("Usage: sweep [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --max-size N     Largest grid size (default 25)");
    println!("  --gamma G        Discount factor (default 0.9)");
    println!("  --threshold T    Convergence threshold (default 1e-4)");
    println!("  --parallel       Run trials on the rayon pool");
    println!("  --json           Print the (size, sweeps) pairs as JSON");
}
