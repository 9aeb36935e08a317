//! Tilt physics and the analyses built on top of it

/// Disjoint glue groups keyed by stable tile identity
pub mod glue;
/// Misplacement scoring against the ending layout
pub mod goal;
/// Four-way simulated tilt selection
pub mod heuristic;
/// Intersection of per-direction immovable positions
pub mod immovable;
/// Bitset over board positions
pub mod mask;
/// Facade owning one board and its glue registry
pub mod puzzle;
/// Directional fixed-point sliding
pub mod tilt;

pub use glue::{GlueRegistry, GroupId};
pub use puzzle::Puzzle;
pub use tilt::{Direction, TiltReport};
