//! Immutable board copies for renderers
//!
//! The engine exposes read-only snapshots at its boundary; a renderer
//! consumes them and performs no board mutation.

use ndarray::Array2;

use crate::board::tile::Tile;
use crate::io::configuration::EMPTY_SYMBOL;

/// A frozen copy of one board grid
///
/// Fully independent of the board it was taken from: later tilts or glue
/// operations never show through.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    cells: Array2<Option<Tile>>,
}

impl BoardSnapshot {
    pub(crate) const fn new(cells: Array2<Option<Tile>>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Tile at the cell, `None` when empty or out of range
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Iterate over all cells in row-major order with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<Tile>)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), tile)| (row, col, *tile))
    }

    /// Render the grid as one symbol string per row
    pub fn symbol_rows(&self) -> Vec<String> {
        (0..self.rows())
            .map(|row| {
                (0..self.cols())
                    .map(|col| self.tile_at(row, col).map_or(EMPTY_SYMBOL, |tile| tile.symbol()))
                    .collect()
            })
            .collect()
    }
}
