use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_2::part1;

/// Solves part 1 of day 2 for the given puzzle input.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the puzzle input
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
