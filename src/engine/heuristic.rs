//! Brute-force tilt selection
//!
//! Evaluates all four directions on scratch copies of the board and applies
//! the one leaving the fewest misplaced tiles. Each trial runs on its own
//! deep copy of both the board and the glue registry; sharing state across
//! trials would let one simulation perturb the inputs of the next.

use crate::board::grid::Board;
use crate::engine::glue::GlueRegistry;
use crate::engine::goal::misplaced_count;
use crate::engine::tilt::{Direction, tilt};

/// Direction whose simulated tilt minimizes misplacement, with its score
///
/// Ties keep the earlier direction in [`Direction::ALL`] order (left, right,
/// up, down); only a strictly lower score displaces the current best.
pub fn best_direction(board: &Board, glue: &GlueRegistry) -> (Direction, usize) {
    let mut best = (Direction::Left, usize::MAX);
    for direction in Direction::ALL {
        let mut trial_board = board.clone();
        let mut trial_glue = glue.clone();
        tilt(&mut trial_board, &mut trial_glue, direction);
        let misplaced = misplaced_count(&trial_board);
        if misplaced < best.1 {
            best = (direction, misplaced);
        }
    }
    best
}

/// Apply the best-scoring tilt to the real board
///
/// The board is untouched until the decision is made; only the winning
/// direction is ever applied to it.
pub fn auto_tilt(board: &mut Board, glue: &mut GlueRegistry) -> Direction {
    let (direction, _) = best_direction(board, glue);
    tilt(board, glue, direction);
    direction
}
