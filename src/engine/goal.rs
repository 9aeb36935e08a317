//! Scoring against the ending layout

use crate::board::grid::Board;

/// Count cells where the starting grid disagrees with the ending grid
///
/// A cell counts as misplaced when the ending grid holds a tile there and the
/// starting cell is empty or differs in color. Cells the ending grid leaves
/// empty are never counted.
pub fn misplaced_count(board: &Board) -> usize {
    let mut count = 0;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(target) = board.ending_cell(row, col) else {
                continue;
            };
            match board.cell(row, col) {
                Some(tile) if tile.color == target.color => {}
                _ => count += 1,
            }
        }
    }
    count
}

/// Whether the starting grid matches the ending grid exactly
///
/// Stricter than a zero misplacement count: presence, kind, and color must
/// all agree in every cell, so a hole is never mistaken for a normal tile of
/// the same color.
pub fn is_goal(board: &Board) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            match (board.cell(row, col), board.ending_cell(row, col)) {
                (None, None) => {}
                (Some(tile), Some(target))
                    if tile.kind == target.kind && tile.color == target.color => {}
                _ => return false,
            }
        }
    }
    true
}
