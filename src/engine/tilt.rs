//! Directional sliding to a fixed point
//!
//! A tilt repeats single-step passes until no tile can advance. Each pass
//! scans cells nearest-to-far from the moving edge and moves every movable
//! tile at most one step, so "tiles slide all the way" falls out of the
//! fixed-point loop rather than per-tile distance math. Glue groups are moved
//! atomically: either every member advances by the step offset or none do.

use std::collections::HashSet;

use crate::board::grid::{Board, Relocation};
use crate::board::tile::{Tile, TileId, TileKind};
use crate::engine::glue::{GlueRegistry, GroupId};
use crate::io::error::{PuzzleError, Result};

/// Tilt direction, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column zero
    Left,
    /// Toward the last column
    Right,
    /// Toward row zero
    Up,
    /// Toward the last row
    Down,
}

impl Direction {
    /// All directions, in the heuristic's tie-breaking preference order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Parse a direction symbol
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for symbols outside {l, r, u, d}
    /// (case-insensitive).
    pub const fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_lowercase() {
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            'u' => Ok(Self::Up),
            'd' => Ok(Self::Down),
            _ => Err(PuzzleError::InvalidDirection { symbol }),
        }
    }

    /// Lowercase symbol for this direction
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Up => 'u',
            Self::Down => 'd',
        }
    }

    /// One-step (row, col) offset toward the moving edge
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }

    /// Cell coordinates in nearest-to-far order from the moving edge
    ///
    /// Cells already resting on the edge are omitted; they have nowhere to
    /// go.
    fn scan_order(self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        let mut order = Vec::with_capacity(rows * cols);
        match self {
            Self::Left => {
                for row in 0..rows {
                    for col in 1..cols {
                        order.push((row, col));
                    }
                }
            }
            Self::Right => {
                for row in 0..rows {
                    for col in (0..cols.saturating_sub(1)).rev() {
                        order.push((row, col));
                    }
                }
            }
            Self::Up => {
                for col in 0..cols {
                    for row in 1..rows {
                        order.push((row, col));
                    }
                }
            }
            Self::Down => {
                for col in 0..cols {
                    for row in (0..rows.saturating_sub(1)).rev() {
                        order.push((row, col));
                    }
                }
            }
        }
        order
    }
}

/// Movement tally for one tilt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TiltReport {
    /// Single-step relocations performed
    pub moves: usize,
    /// Tiles consumed by holes
    pub absorptions: usize,
}

/// Slide every movable tile as far as possible in the given direction
///
/// Runs single-step passes to a fixed point. Cell-level failures end the
/// affected tile's slide for the pass but never abort the scan. Terminates
/// because every pass that reports movement strictly reduces the total
/// distance between tiles and the moving edge.
pub fn tilt(board: &mut Board, glue: &mut GlueRegistry, direction: Direction) -> TiltReport {
    let mut report = TiltReport::default();
    while tilt_pass(board, glue, direction, &mut report) {}
    report
}

/// One scan over the board; true if anything moved
fn tilt_pass(
    board: &mut Board,
    glue: &mut GlueRegistry,
    direction: Direction,
    report: &mut TiltReport,
) -> bool {
    let mut moved = false;
    let mut attempted_groups: HashSet<GroupId> = HashSet::new();

    for (row, col) in direction.scan_order(board.rows(), board.cols()) {
        let Some(tile) = board.cell(row, col) else {
            continue;
        };
        if !tile.kind.is_movable() {
            continue;
        }

        if let Some(group) = glue.group_of(tile.id) {
            // One atomic attempt per group per pass
            if attempted_groups.insert(group) && move_group(board, glue, group, direction, report) {
                moved = true;
            }
            continue;
        }

        let Some(target) = offset(board, (row, col), direction) else {
            continue;
        };
        match board.relocate((row, col), target) {
            Ok(Relocation::Moved) => {
                report.moves += 1;
                moved = true;
            }
            Ok(Relocation::Absorbed(absorbed)) => {
                glue.discard(absorbed.id);
                report.absorptions += 1;
                moved = true;
            }
            Ok(Relocation::Stayed) | Err(_) => {}
        }
    }

    moved
}

/// Move every member of a rigid group one step, or none at all
///
/// The group stays put if any member is a non-sliding kind or faces a cell
/// that is out of bounds or occupied by a non-hole tile outside the group.
/// Members whose target is a hole are absorbed when the group moves.
fn move_group(
    board: &mut Board,
    glue: &mut GlueRegistry,
    group: GroupId,
    direction: Direction,
    report: &mut TiltReport,
) -> bool {
    let members = collect_members(board, glue, group);
    if members.is_empty() {
        return false;
    }
    let member_ids: HashSet<TileId> = members.iter().map(|tile| tile.id).collect();

    // Resolve every member's target up front; the settle loop reuses these so
    // a lifted tile always has a cell to land in
    let mut steps: Vec<(Tile, (usize, usize))> = Vec::with_capacity(members.len());
    for tile in members {
        if !tile.kind.is_movable() {
            return false;
        }
        let Some(target) = offset(board, (tile.row, tile.col), direction) else {
            return false;
        };
        match board.cell(target.0, target.1) {
            None => {}
            Some(occupant) if member_ids.contains(&occupant.id) => {}
            Some(occupant) if occupant.kind == TileKind::Hole => {}
            Some(_) => return false,
        }
        steps.push((tile, target));
    }

    // Lift the whole group first so members can shift into each other's cells
    for (tile, _) in &steps {
        board.take(tile.row, tile.col);
    }
    for (tile, target) in steps {
        match board.cell(target.0, target.1) {
            Some(occupant) if occupant.kind == TileKind::Hole => {
                glue.discard(tile.id);
                report.absorptions += 1;
            }
            _ => {
                board.put(target.0, target.1, tile);
                report.moves += 1;
            }
        }
    }
    true
}

/// Current positions of the group's members
fn collect_members(board: &Board, glue: &GlueRegistry, group: GroupId) -> Vec<Tile> {
    let mut members = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if let Some(tile) = board.cell(row, col) {
                if glue.group_of(tile.id) == Some(group) {
                    members.push(tile);
                }
            }
        }
    }
    members
}

/// Neighboring cell one step toward the direction, if on the board
fn offset(board: &Board, from: (usize, usize), direction: Direction) -> Option<(usize, usize)> {
    let (dr, dc) = direction.step();
    let row = from.0.checked_add_signed(dr)?;
    let col = from.1.checked_add_signed(dc)?;
    board.in_bounds(row, col).then_some((row, col))
}
