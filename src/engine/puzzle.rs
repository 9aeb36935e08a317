//! Puzzle facade: one board plus its glue registry
//!
//! The public API surface of the core. All mutators run to completion before
//! returning; there is no background work, and the only aliasing concern is
//! the deep copies the simulations take for themselves.

use crate::board::grid::{Board, Relocation};
use crate::board::snapshot::BoardSnapshot;
use crate::board::tile::{Tile, TileColor, TileKind};
use crate::engine::glue::GlueRegistry;
use crate::engine::tilt::{Direction, TiltReport, tilt};
use crate::engine::{goal, heuristic, immovable};
use crate::io::error::{PuzzleError, Result};

/// A sliding-tile puzzle: board state, goal layout, and glue groups
#[derive(Debug, Clone)]
pub struct Puzzle {
    board: Board,
    glue: GlueRegistry,
}

impl Puzzle {
    /// Create a puzzle with an empty board of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            glue: GlueRegistry::new(),
        })
    }

    /// Create a puzzle from starting and ending symbol layouts
    ///
    /// # Errors
    ///
    /// Propagates the construction errors of [`Board::from_symbols`].
    pub fn from_symbols(starting: &[&str], ending: &[&str]) -> Result<Self> {
        Ok(Self {
            board: Board::from_symbols(starting, ending)?,
            glue: GlueRegistry::new(),
        })
    }

    /// Create a puzzle with an empty starting board and the given goal
    ///
    /// # Errors
    ///
    /// Propagates the construction errors of [`Board::from_ending`].
    pub fn from_ending(ending: &[&str]) -> Result<Self> {
        Ok(Self {
            board: Board::from_ending(ending)?,
            glue: GlueRegistry::new(),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Read-only access to the board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only access to the glue registry
    pub const fn glue_registry(&self) -> &GlueRegistry {
        &self.glue
    }

    /// Add a tile to an empty cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `PositionOccupied` per the board contract.
    pub fn add_tile(&mut self, row: usize, col: usize, color: TileColor, kind: TileKind) -> Result<()> {
        self.board.place(row, col, color, kind)?;
        Ok(())
    }

    /// Delete the tile at the cell, dropping any glue membership
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, `NotFound` for an empty cell, or `Protected`
    /// for a fixed tile.
    pub fn delete_tile(&mut self, row: usize, col: usize) -> Result<()> {
        let tile = self.board.remove(row, col)?;
        self.glue.discard(tile.id);
        Ok(())
    }

    /// Move a tile between cells, honoring hole absorption
    ///
    /// # Errors
    ///
    /// Propagates the board's relocation errors.
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<()> {
        if let Relocation::Absorbed(tile) = self.board.relocate(from, to)? {
            self.glue.discard(tile.id);
        }
        Ok(())
    }

    /// Turn an empty cell into a hole
    ///
    /// # Errors
    ///
    /// Returns `AlreadyHole` for an existing hole and `PositionOccupied` for
    /// any other occupant.
    pub fn make_hole(&mut self, row: usize, col: usize) -> Result<()> {
        self.board.make_hole(row, col)?;
        Ok(())
    }

    /// Glue the tile at the cell to its occupied orthogonal neighbors
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, `NotFound` for an empty cell, `Protected` if
    /// the tile's kind forbids gluing, or `AlreadyGlued`.
    pub fn glue(&mut self, row: usize, col: usize) -> Result<()> {
        let anchor = self
            .board
            .get(row, col)?
            .ok_or(PuzzleError::NotFound { row, col })?;
        let neighbors = self.adjacent_tiles(row, col);
        self.glue.glue(anchor, &neighbors)?;
        Ok(())
    }

    /// Remove the tile at the cell from its glue group
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, `NotFound` for an empty cell, or `NotGlued`.
    pub fn unglue(&mut self, row: usize, col: usize) -> Result<()> {
        let tile = self
            .board
            .get(row, col)?
            .ok_or(PuzzleError::NotFound { row, col })?;
        self.glue.unglue(tile)
    }

    /// Slide every movable tile as far as possible in the direction
    pub fn tilt(&mut self, direction: Direction) -> TiltReport {
        tilt(&mut self.board, &mut self.glue, direction)
    }

    /// Tilt by direction symbol
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for symbols outside {l, r, u, d}.
    pub fn tilt_symbol(&mut self, symbol: char) -> Result<TiltReport> {
        let direction = Direction::from_symbol(symbol)?;
        Ok(self.tilt(direction))
    }

    /// Apply the tilt direction that minimizes misplacement
    ///
    /// Simulates all four directions on scratch copies first; the real board
    /// only receives the winning tilt.
    pub fn auto_tilt(&mut self) -> Direction {
        heuristic::auto_tilt(&mut self.board, &mut self.glue)
    }

    /// Tile at the cell, if any
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<Option<Tile>> {
        self.board.get(row, col)
    }

    /// Whether the board matches the goal layout exactly
    pub fn is_goal(&self) -> bool {
        goal::is_goal(&self.board)
    }

    /// Number of cells disagreeing with the goal layout
    pub fn misplaced_count(&self) -> usize {
        goal::misplaced_count(&self.board)
    }

    /// Positions no tilt can move, under all four directions
    pub fn fixed_positions(&self) -> Vec<(usize, usize)> {
        immovable::fixed_positions(&self.board, &self.glue)
    }

    /// Number of tiles on the board, holes included
    pub fn tile_count(&self) -> usize {
        self.board.tile_count()
    }

    /// Immutable copy of the current grid for a renderer
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Immutable copy of the goal grid for a renderer
    pub fn ending_snapshot(&self) -> BoardSnapshot {
        self.board.ending_snapshot()
    }

    /// Swap the board with its goal layout
    ///
    /// Glue membership is keyed by tile identity and stays with the tiles:
    /// groups whose members land on the goal side lie dormant, since tilts
    /// only consult tiles on the playable grid, and come back into force if
    /// the grids are swapped again.
    pub fn exchange(&mut self) {
        self.board.swap_grids();
    }

    /// Clear the board and every glue group; the goal layout stays
    pub fn reset(&mut self) {
        self.board.clear_starting();
        self.glue.clear();
    }

    /// Occupied orthogonal neighbors of the cell
    fn adjacent_tiles(&self, row: usize, col: usize) -> Vec<Tile> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.extend(self.board.cell(row - 1, col));
        }
        neighbors.extend(self.board.cell(row + 1, col));
        if col > 0 {
            neighbors.extend(self.board.cell(row, col - 1));
        }
        neighbors.extend(self.board.cell(row, col + 1));
        neighbors
    }
}
