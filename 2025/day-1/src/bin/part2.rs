use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_1::part2;

/// Solves part 2 of day 1 for the given puzzle input.
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
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
