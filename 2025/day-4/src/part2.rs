use miette::*;

use crate::grid::{Extraction, Grid, ACCESS_THRESHOLD};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input);

    let total_removed = grid.reduce(ACCESS_THRESHOLD, Extraction::Fifo);
    tracing::info!(rows = grid.height(), rolls = grid.roll_count(), total_removed);

    Ok(total_removed.to_string())
}
