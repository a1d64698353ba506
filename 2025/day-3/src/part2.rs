use miette::*;

use crate::bank::{max_joltage, parse_banks};

/// Batteries switched on per bank.
const BATTERIES: usize = 12;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let banks = parse_banks(input, BATTERIES);

    let total_joltage: u64 = banks
        .iter()
        .map(|bank| max_joltage(bank, BATTERIES))
        .sum();

    tracing::info!(banks = banks.len(), total_joltage);

    Ok(total_joltage.to_string())
}
