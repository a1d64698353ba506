use chumsky::prelude::*;

fn bank_parser<'a>() -> impl Parser<'a, &'a str, &'a str, extra::Err<Rich<'a, char>>> {
    text::digits(10).to_slice().then_ignore(end())
}

/// Collects every line that is a battery bank with at least `k` batteries.
///
/// Lines are trimmed first; anything that is not purely digits, or is too
/// short to switch on `k` batteries, is skipped.
pub fn parse_banks(input: &str, k: usize) -> Vec<&str> {
    let parser = bank_parser();

    input
        .lines()
        .flat_map(|line| line.split('\r'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parser.parse(line).into_result() {
            Ok(bank) if bank.len() >= k => Some(bank),
            Ok(bank) => {
                tracing::debug!(bank, k, "skipping short bank");
                None
            }
            Err(errors) => {
                tracing::debug!(line, ?errors, "skipping non-bank line");
                None
            }
        })
        .collect()
}

/// Finds the largest integer that can be formed by keeping exactly `k` digits
/// from the bank while preserving their relative order.
///
/// Returns 0 when the bank holds fewer than `k` digits or anything but digits.
pub(crate) fn max_joltage(bank: &str, k: usize) -> u64 {
    let digits = bank.as_bytes();
    let n = digits.len();

    if n < k || !digits.iter().all(u8::is_ascii_digit) {
        return 0;
    }

    let mut to_remove = n - k;
    let mut stack: Vec<u8> = Vec::with_capacity(n);

    for &digit in digits {
        while to_remove > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            to_remove -= 1;
        }
        stack.push(digit);
    }

    stack.truncate(k);

    stack
        .into_iter()
        .fold(0u64, |acc, digit_byte| acc * 10 + u64::from(digit_byte - b'0'))
}
