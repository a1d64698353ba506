use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

use crate::ids::{parse_ranges, repeated_ids, Repeats};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse_ranges(input);

    // IDs are deduplicated within a range only; overlapping ranges each count theirs.
    let sum: u64 = ranges
        .par_iter()
        .map(|&range| repeated_ids(range, Repeats::Twice).unique().sum::<u64>())
        .sum();

    tracing::info!(ranges = ranges.len(), sum);

    Ok(sum.to_string())
}
