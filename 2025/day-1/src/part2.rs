use miette::*;

use crate::dial::{instructions, Dial};

/// Counts every click that points at 0, whether the dial stops there or passes through.
///
/// Fails on the first malformed line, leaving earlier rotations applied.
pub fn count_clicks(dial: &mut Dial, input: &str) -> Result<u64> {
    instructions(input).try_fold(0, |total, instruction| Ok(total + dial.turn(instruction?)))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut dial = Dial::new();
    let total_hits = count_clicks(&mut dial, input)?;

    tracing::info!(total_hits, final_position = dial.position());

    Ok(total_hits.to_string())
}
