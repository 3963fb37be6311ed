//! The 3x3 sliding-tile puzzle (8-puzzle).
//!
//! Tiles are numbered 1..=8 and 0 marks the blank. The goal is
//! `1 2 3 / 4 5 6 / 7 8 0`. Moves are named after the direction the blank
//! travels and all cost 1.

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    state::{State, Successor},
};

const SIDE: usize = 3;
const GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

    pub fn name(self) -> &'static str {
        match self {
            Slide::Up => "up",
            Slide::Down => "down",
            Slide::Left => "left",
            Slide::Right => "right",
        }
    }

    pub fn reverse(self) -> Slide {
        match self {
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile layout, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    tiles: [u8; 9],
}

impl Puzzle {
    /// The solved layout.
    pub fn goal() -> Self {
        Self { tiles: GOAL }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidTiles`] unless `tiles` is a permutation of `0..=8`.
    pub fn from_tiles(tiles: [u8; 9]) -> Result<Self> {
        let mut seen = [false; 9];
        for &tile in &tiles {
            let slot = seen.get_mut(usize::from(tile)).ok_or_else(|| Error::InvalidTiles {
                input: format!("{tiles:?}"),
                reason: format!("tile {tile} is out of range 0..=8"),
            })?;
            if *slot {
                return Err(Error::InvalidTiles {
                    input: format!("{tiles:?}"),
                    reason: format!("tile {tile} appears more than once"),
                });
            }
            *slot = true;
        }
        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[u8; 9] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }

    /// Whether the goal is reachable: the inversion count of the tiles
    /// (blank ignored) must be even on an odd-width board.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| a > b).count())
            .sum::<usize>();
        inversions.is_multiple_of(2)
    }

    /// Layout after moving the blank, or `None` at the edge.
    pub fn slide(&self, direction: Slide) -> Option<Puzzle> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let target = match direction {
            Slide::Up if row > 0 => blank - SIDE,
            Slide::Down if row + 1 < SIDE => blank + SIDE,
            Slide::Left if col > 0 => blank - 1,
            Slide::Right if col + 1 < SIDE => blank + 1,
            _ => return None,
        };
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(Puzzle { tiles })
    }

    /// Sum over tiles of the grid distance to their goal cell.
    pub fn manhattan(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| {
                let home = usize::from(tile) - 1;
                let rows = (index / SIDE).abs_diff(home / SIDE);
                let cols = (index % SIDE).abs_diff(home % SIDE);
                (rows + cols) as u32
            })
            .sum()
    }

    /// Random walk of `steps` moves away from the goal, never undoing the
    /// previous move. The result is always solvable.
    pub fn scrambled<R: Rng + ?Sized>(steps: usize, rng: &mut R) -> Self {
        let mut puzzle = Self::goal();
        let mut last: Option<Slide> = None;
        for _ in 0..steps {
            let options: Vec<(Slide, Puzzle)> = Slide::ALL
                .iter()
                .filter(|&&d| Some(d.reverse()) != last)
                .filter_map(|&d| puzzle.slide(d).map(|next| (d, next)))
                .collect();
            if let Some(&(direction, next)) = options.choose(rng) {
                puzzle = next;
                last = Some(direction);
            }
        }
        puzzle
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::goal()
    }
}

impl FromStr for Puzzle {
    type Err = Error;

    /// Parse nine comma- or space-separated tiles, e.g. `"1,2,3,4,5,6,7,8,0"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidTiles {
            input: s.to_string(),
            reason,
        };
        let parsed: Vec<u8> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| invalid(format!("'{part}' is not a tile number")))
            })
            .collect::<Result<_>>()?;
        let tiles: [u8; 9] = parsed
            .as_slice()
            .try_into()
            .map_err(|_| invalid(format!("expected 9 tiles, got {}", parsed.len())))?;
        Self::from_tiles(tiles).map_err(|err| match err {
            Error::InvalidTiles { reason, .. } => invalid(reason),
            other => other,
        })
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = chunk
                .iter()
                .map(|&t| if t == 0 { ".".to_string() } else { t.to_string() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl State for Puzzle {
    fn is_terminal(&self) -> bool {
        self.tiles == GOAL
    }

    fn successors(&self) -> Vec<Successor<Self>> {
        Slide::ALL
            .iter()
            .filter_map(|&direction| {
                self.slide(direction)
                    .map(|next| Successor::labelled(1.0, direction.name(), next))
            })
            .collect()
    }

    fn heuristic(&self) -> f64 {
        f64::from(self.manhattan())
    }
}
