//! Immovability analysis
//!
//! A position is permanently fixed when the tile occupying it survives a
//! simulated tilt in place under every direction. Identity, not color,
//! decides survival: a different tile of the same color sliding into the
//! cell does not count.

use crate::board::grid::Board;
use crate::engine::glue::GlueRegistry;
use crate::engine::mask::PositionMask;
use crate::engine::tilt::{Direction, tilt};

/// Positions whose tiles no tilt can move, in row-major order
///
/// Runs one independent simulation per direction and intersects the four
/// per-direction immovability masks.
pub fn fixed_positions(board: &Board, glue: &GlueRegistry) -> Vec<(usize, usize)> {
    let (rows, cols) = (board.rows(), board.cols());
    let mut intersection = PositionMask::filled(rows, cols);

    for direction in Direction::ALL {
        let mut trial_board = board.clone();
        let mut trial_glue = glue.clone();
        tilt(&mut trial_board, &mut trial_glue, direction);

        let mut immovable = PositionMask::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                if let (Some(before), Some(after)) =
                    (board.cell(row, col), trial_board.cell(row, col))
                {
                    if before.id == after.id {
                        immovable.insert(row, col);
                    }
                }
            }
        }
        intersection.intersect_with(&immovable);
    }

    intersection.positions()
}
