use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

use crate::ids::{parse_ranges, repeated_ids, Repeats};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse_ranges(input);

    // 1111 comes out as both 1 x 4 and 11 x 2, so dedup within each range.
    // Overlapping ranges each count their own IDs.
    let sum: u64 = ranges
        .par_iter()
        .map(|&range| repeated_ids(range, Repeats::AtLeastTwice).unique().sum::<u64>())
        .sum();

    tracing::info!(ranges = ranges.len(), sum);

    Ok(sum.to_string())
}
