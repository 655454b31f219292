//! Bifid cipher: Polybius substitution plus coordinate fractionation.
//!
//! # Encryption
//!
//! ```text
//! H E L L O
//! rows: 2 1 3 3 3      cols: 3 5 1 1 4
//! linear: 2 1 3 3 3 3 5 1 1 4
//! pairs:  (2,1) (3,3) (3,3) (5,1) (1,4)
//!          F     N     N     V     D
//! ```
//!
//! Decryption writes each ciphertext coordinate into one interleaved
//! sequence, splits it at the midpoint into rows and columns, and zips them
//! back together. The sequence always has even length (two coordinates per
//! letter), so the split is exact.
//!
//! # Non-letters
//!
//! The classic behavior is [`NonAlphabetic::Drop`]: anything that is not a
//! letter is removed before fractionation, and the output is as long as the
//! number of letters. [`NonAlphabetic::PassThrough`] instead keeps those
//! characters at their original positions and fractionates only the letters.

use tracing::{debug, trace};

use crate::cipher::Cipher;
use crate::polybius::{fold, Coord, PolybiusSquare};

/// Treatment of characters that have no cell in the square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonAlphabetic {
    /// Remove them from the output.
    #[default]
    Drop,
    /// Keep them in place; fractionate letters only.
    PassThrough,
}

/// Position of a character in the normalized message.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Letter,
    Other(char),
}

/// Bifid cipher over the standard Polybius square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bifid {
    square: PolybiusSquare,
    non_alphabetic: NonAlphabetic,
}

impl Bifid {
    /// Bifid with the classic drop behavior.
    pub fn new() -> Self {
        Self::with_policy(NonAlphabetic::Drop)
    }

    /// Bifid with an explicit non-letter policy.
    pub fn with_policy(non_alphabetic: NonAlphabetic) -> Self {
        debug!(?non_alphabetic, "bifid cipher constructed");
        Self {
            square: PolybiusSquare::standard(),
            non_alphabetic,
        }
    }

    pub fn policy(&self) -> NonAlphabetic {
        self.non_alphabetic
    }

    pub fn square(&self) -> &PolybiusSquare {
        &self.square
    }

    /// Normalize `text` and split it into letter coordinates and a layout
    /// describing where non-letters sit (empty under `Drop`).
    fn split(&self, text: &str) -> (Vec<Coord>, Vec<Slot>) {
        let mut coords = Vec::with_capacity(text.len());
        let mut layout = Vec::new();
        let keep_others = self.non_alphabetic == NonAlphabetic::PassThrough;

        for c in text.chars().map(fold) {
            match self.square.coord_of(c) {
                Some(coord) => {
                    coords.push(coord);
                    if keep_others {
                        layout.push(Slot::Letter);
                    }
                }
                None if keep_others => layout.push(Slot::Other(c)),
                None => {}
            }
        }

        (coords, layout)
    }

    /// Map coordinates back to letters and re-insert non-letters.
    fn join(&self, coords: &[Coord], layout: &[Slot]) -> String {
        let mut letters = coords.iter().filter_map(|&coord| self.square.letter_at(coord));

        if self.non_alphabetic == NonAlphabetic::Drop {
            return letters.collect();
        }

        layout
            .iter()
            .filter_map(|slot| match slot {
                Slot::Letter => letters.next(),
                Slot::Other(c) => Some(*c),
            })
            .collect()
    }
}

impl Default for Bifid {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for Bifid {
    fn name(&self) -> &'static str {
        "Bifid"
    }

    fn encrypt(&self, text: &str) -> String {
        let (coords, layout) = self.split(text);
        trace!(letters = coords.len(), "bifid encrypt");
        self.join(&fractionate(&coords), &layout)
    }

    fn decrypt(&self, text: &str) -> String {
        let (coords, layout) = self.split(text);
        trace!(letters = coords.len(), "bifid decrypt");
        self.join(&unfractionate(&coords), &layout)
    }
}

/// Rows then columns, read back two at a time.
fn fractionate(coords: &[Coord]) -> Vec<Coord> {
    let mut linear = Vec::with_capacity(coords.len() * 2);
    linear.extend(coords.iter().map(|c| c.row));
    linear.extend(coords.iter().map(|c| c.col));

    linear
        .chunks_exact(2)
        .map(|pair| Coord::new(pair[0], pair[1]))
        .collect()
}

/// Interleave, split at the midpoint, zip rows with columns.
fn unfractionate(coords: &[Coord]) -> Vec<Coord> {
    let linear: Vec<u8> = coords.iter().flat_map(|c| [c.row, c.col]).collect();
    let (rows, cols) = linear.split_at(linear.len() / 2);

    rows.iter()
        .zip(cols)
        .map(|(&row, &col)| Coord::new(row, col))
        .collect()
}
