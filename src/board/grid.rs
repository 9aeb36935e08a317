//! Grid state for the starting and ending boards
//!
//! The board owns two equally-shaped grids: the mutable starting layout the
//! engine operates on, and the read-only ending layout it is scored against.
//! Cells are `Option<Tile>` in a flat row-major array, so a deep clone for
//! simulation is a plain memcpy-style copy with no shared state.

use ndarray::Array2;

use crate::board::snapshot::BoardSnapshot;
use crate::board::tile::{Tile, TileColor, TileId, TileKind};
use crate::io::configuration::{EMPTY_SYMBOL, MAX_BOARD_DIMENSION};
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Outcome of a relocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The tile now occupies the destination cell
    Moved,
    /// The destination held a hole; the tile was consumed
    Absorbed(Tile),
    /// The source held a hole; nothing happened
    Stayed,
}

/// Puzzle board with fixed dimensions set at construction
///
/// Invariant: the starting and ending grids always share the same shape, and
/// a tile's `(row, col)` fields always match the cell holding it.
#[derive(Debug, Clone)]
pub struct Board {
    starting: Array2<Option<Tile>>,
    ending: Array2<Option<Tile>>,
    next_id: u32,
}

impl Board {
    /// Create an empty board with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows > MAX_BOARD_DIMENSION || cols > MAX_BOARD_DIMENSION {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            starting: Array2::from_elem((rows, cols), None),
            ending: Array2::from_elem((rows, cols), None),
            next_id: 0,
        })
    }

    /// Build a board from starting and ending symbol grids
    ///
    /// Each string is one row; see `Tile::attributes_from_symbol` for the
    /// tile alphabet and `EMPTY_SYMBOL` for unoccupied cells.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the two layouts differ in shape,
    /// `InvalidDimensions` if they are empty, `InvalidParameter` if rows are
    /// ragged, and `UnknownSymbol` for symbols outside the alphabet.
    pub fn from_symbols(starting: &[&str], ending: &[&str]) -> Result<Self> {
        let starting_shape = layout_shape(starting)?;
        let ending_shape = layout_shape(ending)?;
        if starting_shape != ending_shape {
            return Err(PuzzleError::ShapeMismatch {
                starting: starting_shape,
                ending: ending_shape,
            });
        }

        let mut board = Self::new(starting_shape.0, starting_shape.1)?;
        board.fill_grid(starting, GridSide::Starting)?;
        board.fill_grid(ending, GridSide::Ending)?;
        Ok(board)
    }

    /// Build a board with an empty starting grid and the given goal layout
    ///
    /// # Errors
    ///
    /// Returns the same construction errors as [`Board::from_symbols`].
    pub fn from_ending(ending: &[&str]) -> Result<Self> {
        let shape = layout_shape(ending)?;
        let mut board = Self::new(shape.0, shape.1)?;
        board.fill_grid(ending, GridSide::Ending)?;
        Ok(board)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.starting.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.starting.ncols()
    }

    /// Whether the indices address a cell on the board
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Tile currently occupying the cell, if any
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Tile>> {
        self.check_bounds(row, col)?;
        Ok(self.cell(row, col))
    }

    /// Goal-layout tile at the cell, if any
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices.
    pub fn get_ending(&self, row: usize, col: usize) -> Result<Option<Tile>> {
        self.check_bounds(row, col)?;
        Ok(self.ending_cell(row, col))
    }

    /// Bounds-free cell read; `None` for out-of-range indices
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.starting.get((row, col)).copied().flatten()
    }

    /// Bounds-free ending cell read; `None` for out-of-range indices
    pub(crate) fn ending_cell(&self, row: usize, col: usize) -> Option<Tile> {
        self.ending.get((row, col)).copied().flatten()
    }

    /// Place a new tile on an empty starting cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices and `PositionOccupied` if
    /// the cell already holds a tile. Never overwrites silently.
    pub fn place(&mut self, row: usize, col: usize, color: TileColor, kind: TileKind) -> Result<TileId> {
        self.check_bounds(row, col)?;
        if self.cell(row, col).is_some() {
            return Err(PuzzleError::PositionOccupied { row, col });
        }
        let id = self.issue_id();
        if let Some(slot) = self.starting.get_mut((row, col)) {
            *slot = Some(Tile {
                id,
                row,
                col,
                color,
                kind,
            });
        }
        Ok(id)
    }

    /// Remove the tile at the cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices, `NotFound` for an empty
    /// cell, and `Protected` when the occupant is a fixed tile.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<Tile> {
        self.check_bounds(row, col)?;
        let tile = self.cell(row, col).ok_or(PuzzleError::NotFound { row, col })?;
        if tile.kind == TileKind::Fixed {
            return Err(PuzzleError::Protected { row, col });
        }
        if let Some(slot) = self.starting.get_mut((row, col)) {
            *slot = None;
        }
        Ok(tile)
    }

    /// Move the tile at `from` to `to`
    ///
    /// A hole at the source is a successful no-op; a hole at the destination
    /// absorbs the moved tile instead of being displaced.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices, `NotFound` if the source is
    /// empty, `Protected` if the source tile is fixed, and `PositionOccupied`
    /// if the destination holds any tile other than a hole.
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<Relocation> {
        self.check_bounds(from.0, from.1)?;
        self.check_bounds(to.0, to.1)?;

        let tile = self.cell(from.0, from.1).ok_or(PuzzleError::NotFound {
            row: from.0,
            col: from.1,
        })?;
        match tile.kind {
            TileKind::Fixed => {
                return Err(PuzzleError::Protected {
                    row: from.0,
                    col: from.1,
                });
            }
            TileKind::Hole => return Ok(Relocation::Stayed),
            TileKind::Normal | TileKind::Rough => {}
        }

        match self.cell(to.0, to.1) {
            None => {
                if let Some(slot) = self.starting.get_mut((from.0, from.1)) {
                    *slot = None;
                }
                if let Some(slot) = self.starting.get_mut((to.0, to.1)) {
                    *slot = Some(Tile {
                        row: to.0,
                        col: to.1,
                        ..tile
                    });
                }
                Ok(Relocation::Moved)
            }
            Some(occupant) if occupant.kind == TileKind::Hole => {
                if let Some(slot) = self.starting.get_mut((from.0, from.1)) {
                    *slot = None;
                }
                Ok(Relocation::Absorbed(tile))
            }
            Some(_) => Err(PuzzleError::PositionOccupied {
                row: to.0,
                col: to.1,
            }),
        }
    }

    /// Turn an empty cell into a hole
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for invalid indices, `AlreadyHole` if a hole is
    /// present, and `PositionOccupied` for any other occupant; holes never
    /// overwrite tiles.
    pub fn make_hole(&mut self, row: usize, col: usize) -> Result<TileId> {
        self.check_bounds(row, col)?;
        match self.cell(row, col) {
            Some(tile) if tile.kind == TileKind::Hole => Err(PuzzleError::AlreadyHole { row, col }),
            Some(_) => Err(PuzzleError::PositionOccupied { row, col }),
            None => self.place(row, col, TileColor::Gray, TileKind::Hole),
        }
    }

    /// Lift a tile out of its cell without kind checks
    ///
    /// Engine-internal primitive for rigid-group moves; callers re-place
    /// every lifted tile before the board is observed again.
    pub(crate) fn take(&mut self, row: usize, col: usize) -> Option<Tile> {
        self.starting.get_mut((row, col)).and_then(Option::take)
    }

    /// Settle a lifted tile into a cell, updating its position fields
    ///
    /// Engine-internal primitive; the cell must be empty.
    pub(crate) fn put(&mut self, row: usize, col: usize, tile: Tile) {
        if let Some(slot) = self.starting.get_mut((row, col)) {
            *slot = Some(Tile { row, col, ..tile });
        }
    }

    /// Swap the starting and ending grids in place
    ///
    /// Tiles keep their identities and position fields; only which grid
    /// holds them changes. Swapping twice restores the board exactly.
    pub fn swap_grids(&mut self) {
        std::mem::swap(&mut self.starting, &mut self.ending);
    }

    /// Number of tiles on the starting grid, holes included
    pub fn tile_count(&self) -> usize {
        self.starting.iter().filter(|cell| cell.is_some()).count()
    }

    /// Remove every tile from the starting grid
    ///
    /// The ending grid and board dimensions are untouched.
    pub fn clear_starting(&mut self) {
        self.starting.fill(None);
    }

    /// Immutable copy of the starting grid for a renderer
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.starting.clone())
    }

    /// Immutable copy of the ending grid for a renderer
    pub fn ending_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.ending.clone())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(PuzzleError::OutOfBounds {
                row,
                col,
                dims: (self.rows(), self.cols()),
            })
        }
    }

    fn issue_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    fn fill_grid(&mut self, layout: &[&str], side: GridSide) -> Result<()> {
        for (row, line) in layout.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let (color, kind) = Tile::attributes_from_symbol(symbol)
                    .ok_or(PuzzleError::UnknownSymbol { symbol, row, col })?;
                let id = self.issue_id();
                let tile = Some(Tile {
                    id,
                    row,
                    col,
                    color,
                    kind,
                });
                let grid = match side {
                    GridSide::Starting => &mut self.starting,
                    GridSide::Ending => &mut self.ending,
                };
                if let Some(slot) = grid.get_mut((row, col)) {
                    *slot = tile;
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum GridSide {
    Starting,
    Ending,
}

/// Validate a symbol layout and return its (rows, cols) shape
fn layout_shape(layout: &[&str]) -> Result<(usize, usize)> {
    let rows = layout.len();
    let cols = layout.first().map_or(0, |line| line.chars().count());
    if rows == 0 || cols == 0 {
        return Err(PuzzleError::InvalidDimensions { rows, cols });
    }
    for line in layout {
        if line.chars().count() != cols {
            return Err(invalid_parameter(
                "layout",
                line,
                &format!("every row must hold exactly {cols} symbols"),
            ));
        }
    }
    Ok((rows, cols))
}
