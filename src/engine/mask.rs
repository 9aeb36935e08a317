//! Bitset over board positions

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset addressing board cells by (row, col)
///
/// Backed by a row-major bit vector, giving O(1) membership tests and cheap
/// whole-board intersections for the immovability analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl PositionMask {
    /// Create a mask with no positions present
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a mask containing every position
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![1; rows * cols],
            rows,
            cols,
        }
    }

    /// Insert a position; off-board coordinates are ignored
    pub fn insert(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            self.bits.set(row * self.cols + col, true);
        }
    }

    /// Test position membership
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows
            && col < self.cols
            && self.bits.get(row * self.cols + col).as_deref() == Some(&true)
    }

    /// Intersect this mask with another in-place
    ///
    /// Masks of different shapes have no common positions, so the result
    /// empties out.
    pub fn intersect_with(&mut self, other: &Self) {
        if self.rows == other.rows && self.cols == other.cols {
            self.bits &= &other.bits;
        } else {
            self.bits.fill(false);
        }
    }

    /// Test if no positions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count positions in the mask
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all positions in row-major order
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.bits
            .iter_ones()
            .map(|index| (index / self.cols, index % self.cols))
            .collect()
    }
}

impl fmt::Display for PositionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PositionMask({} positions: {:?})",
            self.count(),
            self.positions()
        )
    }
}
