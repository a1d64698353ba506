use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Left(u32),
    Right(u32),
}

/// Parses one trimmed instruction such as `L68` or `R5`.
///
/// Amounts that overflow a `u32` are rejected rather than wrapped.
fn instruction<'a>() -> impl Parser<'a, &'a str, Instruction, extra::Err<Rich<'a, char>>> {
    let amount = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<u32>()
                .map_err(|e| Rich::custom(span, format!("invalid amount: {e}")))
        });

    one_of("LR")
        .then(amount)
        .then_ignore(end())
        .map(|(dir, amount)| match dir {
            'L' => Instruction::Left(amount),
            'R' => Instruction::Right(amount),
            _ => unreachable!("one_of ensures only L or R are parsed"),
        })
}

/// Lazily parses every non-blank line of `input`.
///
/// Lines are split on any newline convention and trimmed first. The iterator
/// yields an error for the first malformed line; callers that stop there get
/// fail-fast behaviour while keeping whatever they already applied.
pub fn instructions(input: &str) -> impl Iterator<Item = Result<Instruction>> + '_ {
    let parser = instruction();

    input
        .lines()
        .flat_map(|line| line.split('\r'))
        .enumerate()
        .map(|(line_no, line)| (line_no, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(move |(line_no, line)| {
            parser.parse(line).into_result().map_err(|e| {
                miette!(
                    "Invalid instruction {:?} on line {}: {:?}",
                    line,
                    line_no + 1,
                    e
                )
            })
        })
}

/// The safe's dial: 100 clicks, numbered 0 to 99, starting at 50.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    position: u32,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

impl Dial {
    pub const START: u32 = 50;
    pub const POSITIONS: u32 = 100;

    pub fn new() -> Self {
        Self {
            position: Self::START,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn reset(&mut self) {
        self.position = Self::START;
    }

    /// Applies one rotation and returns how many clicks pointed at 0 along the way.
    ///
    /// The click the dial comes to rest on is included; the position it
    /// starts from is not.
    pub fn turn(&mut self, instruction: Instruction) -> u64 {
        let pos = i64::from(self.position);
        let modulus = i64::from(Self::POSITIONS);

        let (new_pos, hits) = match instruction {
            Instruction::Left(amount) => {
                let amount = i64::from(amount);

                // Moving left covers [pos - amount, pos - 1]. The number of
                // multiples of 100 in [A, B] is floor(B / 100) - floor((A - 1) / 100).
                let upper = pos - 1;
                let lower_minus_1 = pos - amount - 1;
                let hits = upper.div_euclid(modulus) - lower_minus_1.div_euclid(modulus);

                ((pos - amount).rem_euclid(modulus), hits)
            }
            Instruction::Right(amount) => {
                let amount = i64::from(amount);

                // Moving right covers (pos, pos + amount]; pos is already in 0..100.
                ((pos + amount) % modulus, (pos + amount) / modulus)
            }
        };

        // Both values are non-negative and bounded by the arithmetic above.
        self.position = new_pos as u32;
        hits as u64
    }
}
