use miette::*;

use crate::bank::{max_joltage, parse_banks};

/// Batteries switched on per bank.
const BATTERIES: usize = 2;

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

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case::indented("\n            987654321111111\n            811111111111119\n        ", "187")]
    #[case::varying_lengths("918\n591\n1234\n77", "300")]
    #[case::messy(" 918 \n            \n            777\n            ", "175")]
    #[case::not_digits("12A45", "0")]
    #[case::empty("", "0")]
    fn sums_banks(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
