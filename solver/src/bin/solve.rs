//! gridworld-solve: run value iteration on a single grid and render the
//! converged values and greedy policy as a bordered text grid.
//!
//! `--watch` redraws the grid after every sweep (with optional pacing), so
//! the value wavefront can be watched expanding from the goal cell.

use std::time::Instant;

use gridworld::config::SolverConfig;
use gridworld::grid::GridModel;
use gridworld::policy::{extract_policy, PolicyGrid};
use gridworld::types::State;
use gridworld::value_iteration::{bellman_sweep, solve, ValueGrid};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut rows: usize = 4;
    let mut cols: usize = 4;
    let mut config = SolverConfig::default();
    let mut json = false;
    let mut watch = false;
    let mut pause_ms: u64 = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                rows = args[i].parse().expect("Invalid --rows");
            }
            "--cols" => {
                i += 1;
                cols = args[i].parse().expect("Invalid --cols");
            }
            "--gamma" => {
                i += 1;
                config.discount = args[i].parse().expect("Invalid --gamma");
            }
            "--threshold" => {
                i += 1;
                config.threshold = args[i].parse().expect("Invalid --threshold");
            }
            "--bonus" => {
                i += 1;
                config.goal_bonus = args[i].parse().expect("Invalid --bonus");
            }
            "--pause-ms" => {
                i += 1;
                pause_ms = args[i].parse().expect("Invalid --pause-ms");
            }
            "--json" => {
                json = true;
            }
            "--watch" => {
                watch = true;
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

    let model = GridModel::new(rows, cols, config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if watch {
        watch_run(&model, pause_ms);
        return;
    }

    let t0 = Instant::now();
    let solution = solve(&model);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&solution).expect("Failed to serialize solution")
        );
        return;
    }

    println!("=== gridworld-solve ===");
    println!(
        "Grid: {}x{} | goal: ({},{}) | gamma={} | threshold={} | bonus={}",
        rows,
        cols,
        model.goal().row,
        model.goal().col,
        config.discount,
        config.threshold,
        config.goal_bonus
    );
    println!();
    print_grid(&solution.values, &solution.policy);
    println!(
        "\nConverged in {} sweeps ({:.2} ms).",
        solution.sweeps,
        t0.elapsed().as_secs_f64() * 1000.0
    );
}

/// Re-run the sweep loop by hand so each intermediate grid can be drawn.
/// Follows the engine exactly: swap-after-sweep, stop when delta < ε.
fn watch_run(model: &GridModel, pause_ms: u64) {
    let mut prev = ValueGrid::zeroed(model.rows(), model.cols());
    let mut sweeps = 0u32;

    if model.num_states() > 1 {
        let mut next = prev.clone();
        loop {
            let delta = bellman_sweep(model, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
            sweeps += 1;

            let policy = extract_policy(model, &prev);
            println!("\nSweep {} (delta {:.6})", sweeps, delta);
            print_grid(&prev, &policy);

            if delta < model.config().threshold {
                break;
            }
            if pause_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(pause_ms));
            }
        }
    } else {
        let policy = extract_policy(model, &prev);
        print_grid(&prev, &policy);
    }

    println!("\nConverged in {} sweeps.", sweeps);
}

/// Bordered cell grid: rounded value on the first line of each cell, the
/// policy glyph on the second.
fn print_grid(values: &ValueGrid, policy: &PolicyGrid) {
    let cols = values.cols();
    let mut border = String::new();
    for _ in 0..cols {
        border.push('+');
        border.push_str("--------");
    }
    border.push('+');

    for row in 0..values.rows() {
        println!("{}", border);
        let mut value_line = String::from("|");
        let mut glyph_line = String::from("|");
        for col in 0..cols {
            let state = State::new(row, col);
            value_line.push_str(&format!(" {:>6.1} |", values.get(state)));
            glyph_line.push_str(&format!("   {}    |", policy.get(state).glyph()));
        }
        println!("{}", value_line);
        println!("{}", glyph_line);
    }
    println!("{}", border);
}

fn print_usage() {
    println!("Usage: solve [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --rows N         Grid rows (default 4)");
    println!("  --cols N         Grid cols (default 4)");
    println!("  --gamma G        Discount factor (default 0.9)");
    println!("  --threshold T    Convergence threshold (default 1e-4)");
    println!("  --bonus B        Goal reward (default 100)");
    println!("  --watch          Redraw the grid after every sweep");
    println!("  --pause-ms MS    Pause between redraws in watch mode (default 0)");
    println!("  --json           Print the solution as JSON instead of text");
}
