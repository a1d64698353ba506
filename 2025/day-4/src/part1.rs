use miette::*;

use crate::grid::{Grid, ACCESS_THRESHOLD};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let grid = Grid::parse(input);

    let accessible_count = grid.accessible(ACCESS_THRESHOLD);
    tracing::info!(rows = grid.height(), rolls = grid.roll_count(), accessible_count);

    Ok(accessible_count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("13", process(input)?);
        Ok(())
    }

    #[test]
    fn tolerates_padding_and_noise() -> Result<()> {
        let input = "
@...  

  ..@.
 ..@.
@.A.
";
        assert_eq!("3", process(input)?);
        Ok(())
    }

    #[test]
    fn empty_input_is_zero() -> Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }
}
