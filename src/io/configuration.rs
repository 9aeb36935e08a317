//! Engine constants and runtime configuration defaults

// Layout alphabet
/// Symbol marking an unoccupied cell in text layouts
pub const EMPTY_SYMBOL: char = '.';
/// Symbol for a rough tile
pub const ROUGH_SYMBOL: char = '#';
/// Symbol for a hole
pub const HOLE_SYMBOL: char = 'o';

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible scrambles
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum auto-tilt iterations before giving up on the goal
pub const DEFAULT_MAX_AUTO_TILTS: usize = 100;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to exported render filenames
pub const OUTPUT_SUFFIX: &str = "_board";
/// Edge length of one cell in exported renders, in pixels
pub const CELL_PIXEL_SIZE: u32 = 16;
