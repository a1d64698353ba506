use chumsky::prelude::*;

/// An inclusive range of product IDs, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

/// How often a digit block must repeat for an ID to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeats {
    /// `123123`, `55`, but not `111`.
    Twice,
    /// Any block repeated two or more times: `111`, `121212`, `123123`.
    AtLeastTwice,
}

impl Repeats {
    fn counts(self, len: u32) -> std::ops::RangeInclusive<u32> {
        match self {
            Repeats::Twice => 2..=2,
            Repeats::AtLeastTwice => 2..=len,
        }
    }
}

/// Reads the leading digits of a range endpoint; anything after them is ignored.
fn endpoint_parser<'a>() -> impl Parser<'a, &'a str, u64, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<u64>()
                .map_err(|e| Rich::custom(span, format!("invalid id: {e}")))
        })
        .then_ignore(any().repeated())
}

/// Parses the comma separated list of ranges.
///
/// Each item is split on `-` with empty pieces dropped, so `5--10` and
/// `-11-22` still read as two endpoints. An endpoint is its leading digits
/// (`12abc` is 12). Items that don't come out as exactly two endpoints, and
/// ranges whose start is past their end, are skipped.
pub fn parse_ranges(input: &str) -> Vec<IdRange> {
    let parser = endpoint_parser();

    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            let endpoints: Vec<&str> = item
                .split('-')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();

            let &[start, end] = endpoints.as_slice() else {
                tracing::debug!(item, "skipping range without two endpoints");
                return None;
            };

            match (
                parser.parse(start).into_result(),
                parser.parse(end).into_result(),
            ) {
                (Ok(start), Ok(end)) if start <= end => Some(IdRange { start, end }),
                (Ok(_), Ok(_)) => {
                    tracing::debug!(item, "skipping inverted range");
                    None
                }
                (start, end) => {
                    tracing::debug!(item, ?start, ?end, "skipping malformed range");
                    None
                }
            }
        })
        .collect()
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Every invalid ID in `range`, built directly instead of scanning the range.
///
/// A number made of a `k` digit block `p` repeated `n` times is `p * M` with
/// `M = 1 + 10^k + ... + 10^((n-1)k)`. For each length and repeat count we
/// only need the block values whose product lands inside the range.
///
/// IDs with several decompositions (`1111` is `1` x 4 and `11` x 2) are
/// yielded once per decomposition.
pub fn repeated_ids(range: IdRange, repeats: Repeats) -> impl Iterator<Item = u64> {
    let min_len = digit_count(range.start).max(2);
    let max_len = digit_count(range.end);

    (min_len..=max_len).flat_map(move |len| {
        repeats
            .counts(len)
            .filter(move |n| len % n == 0)
            .flat_map(move |n| {
                let k = len / n;
                let block = 10_u64.pow(k);
                let multiplier = (0..n).fold(0_u64, |acc, _| acc * block + 1);

                // Blocks can't have leading zeros, so they live in [10^(k-1), 10^k - 1].
                let first = range.start.div_ceil(multiplier).max(block / 10);
                let last = (range.end / multiplier).min(block - 1);

                (first..=last).map(move |p| p * multiplier)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;
    use rstest::rstest;

    /// Direct check on the digits, used as an oracle for [`repeated_ids`].
    fn is_invalid_id(n: u64, repeats: Repeats) -> bool {
        let s = n.to_string();
        let len = s.len();
        let bytes = s.as_bytes();

        (1..=len / 2)
            .filter(|pattern_len| len % pattern_len == 0)
            .filter(|pattern_len| repeats == Repeats::AtLeastTwice || len / pattern_len == 2)
            .any(|pattern_len| {
                let pattern = &bytes[..pattern_len];
                bytes.chunks(pattern_len).all(|chunk| chunk == pattern)
            })
    }

    #[test]
    fn parses_messy_ranges() {
        let ranges = parse_ranges(" 11 - 22 , \n      99 - 99, ,20-11,abc,1-2-3,0123-0130");
        assert_eq!(
            ranges,
            vec![
                IdRange { start: 11, end: 22 },
                IdRange { start: 99, end: 99 },
                IdRange { start: 123, end: 130 },
            ]
        );
    }

    #[test]
    fn parses_nothing_from_blank_input() {
        assert!(parse_ranges("").is_empty());
        assert!(parse_ranges(" \n   ").is_empty());
    }

    #[rstest]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(0, 1)]
    #[case(u64::MAX, 20)]
    fn counts_digits(#[case] n: u64, #[case] digits: u32) {
        assert_eq!(digit_count(n), digits);
    }

    #[rstest]
    #[case::twice(IdRange { start: 11, end: 22 }, Repeats::Twice, vec![11, 22])]
    #[case::across_lengths(IdRange { start: 88, end: 1011 }, Repeats::Twice, vec![88, 99, 1010])]
    #[case::just_outside(IdRange { start: 1213, end: 1250 }, Repeats::Twice, vec![])]
    #[case::no_single_digits(IdRange { start: 1, end: 10 }, Repeats::AtLeastTwice, vec![])]
    #[case::triples(IdRange { start: 95, end: 115 }, Repeats::AtLeastTwice, vec![99, 111])]
    #[case::large(
        IdRange { start: 1234567812345670, end: 1234567812345678 },
        Repeats::Twice,
        vec![1234567812345678]
    )]
    fn finds_repeated_ids(
        #[case] range: IdRange,
        #[case] repeats: Repeats,
        #[case] expected: Vec<u64>,
    ) {
        let found = repeated_ids(range, repeats).sorted().dedup().collect_vec();
        assert_eq!(found, expected);
    }

    #[rstest]
    #[case(Repeats::Twice)]
    #[case(Repeats::AtLeastTwice)]
    fn matches_digit_check(#[case] repeats: Repeats) {
        for range in [
            IdRange { start: 0, end: 12_000 },
            IdRange { start: 99_000, end: 1_002_000 },
            IdRange { start: 21_212_100, end: 21_212_300 },
        ] {
            let expected = (range.start..=range.end)
                .filter(|&id| is_invalid_id(id, repeats))
                .collect_vec();
            let found = repeated_ids(range, repeats).sorted().dedup().collect_vec();
            assert_eq!(found, expected, "{range:?}");
        }
    }

    #[test]
    fn parses_lenient_endpoints() {
        let ranges = parse_ranges("5--10,-11-22,12abc-20, 7 - 9x ,abc-5,1-2-3");
        assert_eq!(
            ranges,
            vec![
                IdRange { start: 5, end: 10 },
                IdRange { start: 11, end: 22 },
                IdRange { start: 12, end: 20 },
                IdRange { start: 7, end: 9 },
            ]
        );
    }

    #[test]
    fn handles_the_top_of_the_u64_range() {
        let range = IdRange {
            start: 18_446_744_061_000_000_000,
            end: u64::MAX,
        };
        for repeats in [Repeats::Twice, Repeats::AtLeastTwice] {
            let found = repeated_ids(range, repeats).sorted().dedup().collect_vec();
            assert_eq!(found, vec![18_446_744_061_844_674_406, 18_446_744_071_844_674_407]);
            assert!(found.iter().all(|&id| is_invalid_id(id, repeats)));
        }
    }
}
