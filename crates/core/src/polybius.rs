//! The 5x5 Polybius square used by Bifid.
//!
//! The square holds the 25 letters `A..=Z` without `J`, laid out row-major:
//!
//! ```text
//!       1 2 3 4 5
//!     +----------
//!   1 | A B C D E
//!   2 | F G H I K
//!   3 | L M N O P
//!   4 | Q R S T U
//!   5 | V W X Y Z
//! ```
//!
//! `J` has no cell of its own; callers fold it into `I` with [`fold`] before
//! looking it up.

use crate::alphabet::{index_of, ALPHABET, ALPHABET_LEN};

/// Number of rows (and columns) in the square.
pub const SIDE: u8 = 5;

/// The letter merged into `I`.
pub const MERGED: char = 'J';

/// A 1-indexed cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    fn in_range(self) -> bool {
        (1..=SIDE).contains(&self.row) && (1..=SIDE).contains(&self.col)
    }
}

/// Uppercase `c` (ASCII only) and merge `J` into `I`.
pub fn fold(c: char) -> char {
    match c.to_ascii_uppercase() {
        MERGED => 'I',
        other => other,
    }
}

/// Letter-to-coordinate and coordinate-to-letter lookups.
///
/// # Invariants
/// - `letter_at(coord_of(c)) == c` for every letter except `J`
/// - `coord_of(letter_at(p)) == p` for every in-range coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    grid: [[u8; SIDE as usize]; SIDE as usize],
    coords: [Option<Coord>; ALPHABET_LEN],
}

impl PolybiusSquare {
    /// The unkeyed square in alphabetical order.
    pub fn standard() -> Self {
        let mut grid = [[0u8; SIDE as usize]; SIDE as usize];
        let mut coords = [None; ALPHABET_LEN];

        let letters = ALPHABET.iter().filter(|&&b| b as char != MERGED);
        for (n, &letter) in letters.enumerate() {
            let (r, c) = (n / SIDE as usize, n % SIDE as usize);
            grid[r][c] = letter;
            coords[(letter - b'A') as usize] = Some(Coord::new(r as u8 + 1, c as u8 + 1));
        }

        Self { grid, coords }
    }

    /// Coordinate of an uppercase letter. `J` and non-letters have none.
    pub fn coord_of(&self, c: char) -> Option<Coord> {
        index_of(c).and_then(|i| self.coords[i])
    }

    /// Letter at a 1-indexed coordinate, if it lies inside the square.
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        if !coord.in_range() {
            return None;
        }
        Some(self.grid[coord.row as usize - 1][coord.col as usize - 1] as char)
    }

    /// The letters of row `row` (1-indexed).
    pub fn row(&self, row: u8) -> Option<String> {
        if !(1..=SIDE).contains(&row) {
            return None;
        }
        Some(self.grid[row as usize - 1].iter().map(|&b| b as char).collect())
    }
}

impl Default for PolybiusSquare {
    fn default() -> Self {
        Self::standard()
    }
}
