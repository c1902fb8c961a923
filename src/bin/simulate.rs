//! CLI binary for running code-set simulation tests.
//!
//! Usage:
//!   cargo run --bin simulate -- --seeds 0..1000
//!   cargo run --bin simulate -- --seed 12345 --ops 10000
//!   cargo run --bin simulate -- --seeds 0..500 --depth 7

use std::process::ExitCode;

#[path = "../../tests/simulation/mod.rs"]
mod simulation;

use simulation::{WorkloadConfig, WorkloadContext, WorkloadRunner};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let single_seed = parse_arg(&args, "--seed").map(|s| s.parse::<u64>().expect("invalid seed"));
    let ops = parse_arg(&args, "--ops")
        .map(|s| s.parse::<u64>().expect("invalid ops"))
        .unwrap_or(1000);
    let depth = parse_arg(&args, "--depth")
        .map(|s| s.parse::<u8>().expect("invalid depth"))
        .unwrap_or(4);

    let (seed_start, seed_end) = if let Some(range) = parse_arg(&args, "--seeds") {
        parse_seed_range(&range)
    } else if let Some(seed) = single_seed {
        (seed, seed + 1)
    } else {
        (0, 1000)
    };

    println!("=== Code-set simulation ===");
    println!("Seeds: {}..{}", seed_start, seed_end);
    println!("Ops per seed: {}", ops);
    println!("Tree depth: {}", depth);

    let config = WorkloadConfig {
        operations_per_run: ops,
        max_depth: depth,
        ..Default::default()
    };

    let mut failed: Vec<u64> = Vec::new();
    for seed in seed_start..seed_end {
        let mut runner = WorkloadRunner::new(config.clone());
        let mut ctx = WorkloadContext::new(seed);
        let result = runner.run(&mut ctx);
        if !result.success {
            eprintln!("seed {} FAILED:", seed);
            for v in &result.violations {
                eprintln!("  {}", v);
            }
            failed.push(seed);
        }
    }

    let total = seed_end - seed_start;
    println!(
        "Completed {} seeds, {} failed",
        total,
        failed.len()
    );
    if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        println!("Failed seeds: {:?}", failed);
        ExitCode::FAILURE
    }
}

fn parse_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_seed_range(range: &str) -> (u64, u64) {
    let parts: Vec<&str> = range.split("..").collect();
    if parts.len() != 2 {
        panic!("invalid seed range: {} (expected START..END)", range);
    }
    let start = parts[0].parse::<u64>().expect("invalid range start");
    let end = parts[1].parse::<u64>().expect("invalid range end");
    (start, end)
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed N        Run a single seed");
    println!("  --seeds A..B    Run a range of seeds (default 0..1000)");
    println!("  --ops N         Operations per seed (default 1000)");
    println!("  --depth N       Tree depth (default 4)");
    println!("  -h, --help      Show this help");
}
