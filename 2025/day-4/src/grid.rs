use std::collections::VecDeque;

use chumsky::prelude::*;
use glam::IVec2;

/// Number of occupied neighbours at which a roll stops being reachable by a forklift.
pub const ACCESS_THRESHOLD: u8 = 4;

const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Order in which the removal frontier hands out candidates.
///
/// The final count does not depend on it; it only exists so the loop can be
/// driven both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extraction {
    #[default]
    Fifo,
    Lifo,
}

/// A possibly ragged grid of paper rolls.
///
/// Rows are stored back to back in `cells`; `row_starts[y]..row_starts[y + 1]`
/// is the slice for row `y`, so every row keeps its own width.
#[derive(Debug, Clone)]
pub struct Grid {
    // true = '@' (paper), false = '.' (empty)
    cells: Vec<bool>,
    row_starts: Vec<usize>,
}

/// Parses a single trimmed line made only of '@' and '.'.
fn row_parser<'a>() -> impl Parser<'a, &'a str, Vec<bool>, extra::Err<Rich<'a, char>>> {
    let cell = just('@').to(true).or(just('.').to(false));

    cell.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .then_ignore(end())
}

impl Grid {
    /// Builds a grid from raw puzzle text.
    ///
    /// Lines are split on `\n`, `\r\n` or `\r` and trimmed. Blank lines and
    /// lines holding anything besides '@' and '.' are dropped, the rest become
    /// rows in their original order.
    pub fn parse(input: &str) -> Self {
        let parser = row_parser();
        let mut cells = Vec::new();
        let mut row_starts = vec![0];

        for (line_no, line) in input.lines().flat_map(|line| line.split('\r')).enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parser.parse(line).into_result() {
                Ok(row) => {
                    cells.extend(row);
                    row_starts.push(cells.len());
                }
                Err(errors) => {
                    tracing::debug!(line_no, ?errors, "skipping non-grid line");
                }
            }
        }

        Grid { cells, row_starts }
    }

    pub fn height(&self) -> usize {
        self.row_starts.len() - 1
    }

    fn row_len(&self, y: usize) -> usize {
        self.row_starts[y + 1] - self.row_starts[y]
    }

    /// Flat index of `pos`, or `None` when it falls outside its row.
    fn index(&self, pos: IVec2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if y >= self.height() || x >= self.row_len(y) {
            return None;
        }
        Some(self.row_starts[y] + x)
    }

    /// Coordinates of every occupied cell, row by row.
    fn rolls(&self) -> impl Iterator<Item = (usize, IVec2)> + '_ {
        (0..self.height()).flat_map(move |y| {
            (0..self.row_len(y)).filter_map(move |x| {
                let idx = self.row_starts[y] + x;
                self.cells[idx].then(|| (idx, IVec2::new(x as i32, y as i32)))
            })
        })
    }

    /// In-bounds Moore neighbours of `pos`, as flat indices.
    fn neighbors(&self, pos: IVec2) -> impl Iterator<Item = usize> + '_ {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.index(pos + offset))
    }

    pub fn roll_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// For every cell, how many occupied cells surround it.
    ///
    /// Empty cells get a count too; nothing reads it.
    pub fn neighbor_counts(&self) -> Vec<u8> {
        let mut counts = vec![0u8; self.cells.len()];
        for (_, pos) in self.rolls() {
            for neighbor in self.neighbors(pos) {
                counts[neighbor] += 1;
            }
        }
        counts
    }

    /// Counts the rolls that start out with fewer than `threshold` neighbours.
    pub fn accessible(&self, threshold: u8) -> usize {
        let counts = self.neighbor_counts();
        self.rolls()
            .filter(|&(idx, _)| counts[idx] < threshold)
            .count()
    }

    /// Repeatedly removes accessible rolls until none are left, returning how many went.
    ///
    /// Each removal lowers the counts around it, which may make neighbouring
    /// rolls accessible in turn. Counts only ever go down, so the result does
    /// not depend on `order`.
    pub fn reduce(&self, threshold: u8, order: Extraction) -> usize {
        let mut counts = self.neighbor_counts();
        let mut removed = vec![false; self.cells.len()];
        let mut frontier: VecDeque<(usize, IVec2)> = self
            .rolls()
            .filter(|&(idx, _)| counts[idx] < threshold)
            .collect();
        let mut removed_count = 0;

        tracing::debug!(seeded = frontier.len(), "initial frontier");

        loop {
            let next = match order {
                Extraction::Fifo => frontier.pop_front(),
                Extraction::Lifo => frontier.pop_back(),
            };
            let Some((idx, pos)) = next else {
                break;
            };

            // A roll can be queued more than once before it is processed.
            if removed[idx] {
                continue;
            }
            removed[idx] = true;
            removed_count += 1;

            for offset in NEIGHBOR_OFFSETS {
                let neighbor_pos = pos + offset;
                let Some(neighbor) = self.index(neighbor_pos) else {
                    continue;
                };
                counts[neighbor] -= 1;
                if self.cells[neighbor] && !removed[neighbor] && counts[neighbor] < threshold {
                    frontier.push_back((neighbor, neighbor_pos));
                }
            }
        }

        removed_count
    }
}
