//! Grid-based sliding-tile puzzle engine
//!
//! Tiles sit on a rectangular board; a tilt slides every movable tile as far
//! as possible in one of four directions. Fixed tiles never move, rough tiles
//! block everything behind them, holes consume the first tile that reaches
//! them, and glued tiles move as rigid groups. Boards are scored against a
//! target layout, which also drives a brute-force tilt heuristic and an
//! immovability analysis built on per-direction simulations.

#![forbid(unsafe_code)]

/// Tile model and grid state for the starting and ending boards
pub mod board;
/// Tilt physics, glue grouping, goal scoring, and simulation-based analysis
pub mod engine;
/// Input/output operations and error handling
pub mod io;

pub use board::grid::Board;
pub use board::tile::{Tile, TileColor, TileKind};
pub use engine::puzzle::Puzzle;
pub use engine::tilt::Direction;
pub use io::error::{PuzzleError, Result};
