//! Error types for board, glue, and engine operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
///
/// Every condition here is local and recoverable; callers receive typed
/// results rather than panics, and the tilt engine never aborts a whole pass
/// because of a single bad cell.
#[derive(Debug)]
pub enum PuzzleError {
    /// Cell indices fall outside the board
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Board dimensions (rows, cols)
        dims: (usize, usize),
    },

    /// The destination cell already holds a tile
    PositionOccupied {
        /// Occupied row
        row: usize,
        /// Occupied column
        col: usize,
    },

    /// No tile at the addressed cell
    NotFound {
        /// Addressed row
        row: usize,
        /// Addressed column
        col: usize,
    },

    /// The tile's kind rejects the operation (fixed deletion/relocation,
    /// gluing a hole)
    Protected {
        /// Tile row
        row: usize,
        /// Tile column
        col: usize,
    },

    /// A hole already occupies the cell
    AlreadyHole {
        /// Hole row
        row: usize,
        /// Hole column
        col: usize,
    },

    /// The tile is already a member of a glue group
    AlreadyGlued {
        /// Tile row
        row: usize,
        /// Tile column
        col: usize,
    },

    /// The tile is not a member of any glue group
    NotGlued {
        /// Tile row
        row: usize,
        /// Tile column
        col: usize,
    },

    /// Direction symbol outside the closed set {l, r, u, d}
    InvalidDirection {
        /// Offending symbol
        symbol: char,
    },

    /// Starting and ending layouts differ in shape; no valid board exists
    ShapeMismatch {
        /// Starting grid dimensions (rows, cols)
        starting: (usize, usize),
        /// Ending grid dimensions (rows, cols)
        ending: (usize, usize),
    },

    /// A board dimension is zero or exceeds the supported maximum
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Layout symbol outside the tile alphabet
    UnknownSymbol {
        /// Offending symbol
        symbol: char,
        /// Layout row
        row: usize,
        /// Layout column
        col: usize,
    },

    /// Failed to read a layout file from the filesystem
    LayoutRead {
        /// Path to the layout file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a board render to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, dims } => {
                write!(
                    f,
                    "Position ({row}, {col}) is outside the {}x{} board",
                    dims.0, dims.1
                )
            }
            Self::PositionOccupied { row, col } => {
                write!(f, "Position ({row}, {col}) is already occupied")
            }
            Self::NotFound { row, col } => {
                write!(f, "No tile at position ({row}, {col})")
            }
            Self::Protected { row, col } => {
                write!(f, "Tile at ({row}, {col}) rejects the operation")
            }
            Self::AlreadyHole { row, col } => {
                write!(f, "A hole already occupies ({row}, {col})")
            }
            Self::AlreadyGlued { row, col } => {
                write!(f, "Tile at ({row}, {col}) is already glued")
            }
            Self::NotGlued { row, col } => {
                write!(f, "Tile at ({row}, {col}) is not glued")
            }
            Self::InvalidDirection { symbol } => {
                write!(f, "Invalid tilt direction '{symbol}' (expected l, r, u, or d)")
            }
            Self::ShapeMismatch { starting, ending } => {
                write!(
                    f,
                    "Starting layout is {}x{} but ending layout is {}x{}",
                    starting.0, starting.1, ending.0, ending.1
                )
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Board dimensions {rows}x{cols} are outside the supported range")
            }
            Self::UnknownSymbol { symbol, row, col } => {
                write!(f, "Unknown tile symbol '{symbol}' at layout position ({row}, {col})")
            }
            Self::LayoutRead { path, source } => {
                write!(f, "Failed to read layout '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export render to '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LayoutRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
