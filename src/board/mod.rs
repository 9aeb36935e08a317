//! Board state: tiles, the starting/ending grids, and renderer snapshots

/// Grid state for the starting and ending layouts with bounds-checked access
pub mod grid;
/// Immutable board copies handed to renderers
pub mod snapshot;
/// Tile records, kind variants, colors, and symbol mapping
pub mod tile;

pub use grid::Board;
pub use snapshot::BoardSnapshot;
pub use tile::{Tile, TileColor, TileId, TileKind};
