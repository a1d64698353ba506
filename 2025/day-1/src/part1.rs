use miette::*;

use crate::dial::{instructions, Dial};

/// Counts how many instructions leave `dial` resting on 0.
///
/// Stops at the first malformed line. Rotations applied before it are kept,
/// so `dial` reflects the partial run.
pub fn count_stops(dial: &mut Dial, input: &str) -> Result<usize> {
    let mut zero_hits = 0;

    for instruction in instructions(input) {
        dial.turn(instruction?);
        if dial.position() == 0 {
            zero_hits += 1;
        }
    }

    Ok(zero_hits)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut dial = Dial::new();
    let zero_hits = count_stops(&mut dial, input)?;

    tracing::info!(zero_hits, final_position = dial.position());

    Ok(zero_hits.to_string())
}
