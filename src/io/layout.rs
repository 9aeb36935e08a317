//! Text layout parsing
//!
//! A layout file holds one or two symbol grids separated by a blank line:
//! starting board first, ending board second. A single grid is treated as a
//! goal-only layout with an empty starting board.

use std::path::Path;

use crate::engine::puzzle::Puzzle;
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Symbol grids extracted from layout text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Starting board rows; empty when the layout is goal-only
    pub starting: Vec<String>,
    /// Ending board rows
    pub ending: Vec<String>,
}

impl Layout {
    /// Build the puzzle this layout describes
    ///
    /// # Errors
    ///
    /// Propagates the board construction errors (shape mismatch, unknown
    /// symbols, ragged rows).
    pub fn into_puzzle(self) -> Result<Puzzle> {
        let ending: Vec<&str> = self.ending.iter().map(String::as_str).collect();
        if self.starting.is_empty() {
            Puzzle::from_ending(&ending)
        } else {
            let starting: Vec<&str> = self.starting.iter().map(String::as_str).collect();
            Puzzle::from_symbols(&starting, &ending)
        }
    }
}

/// Split layout text into its symbol grids
///
/// # Errors
///
/// Returns `InvalidParameter` if the text holds no grid or more than two.
pub fn parse_layout(text: &str) -> Result<Layout> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    let mut blocks = blocks.into_iter();
    match (blocks.next(), blocks.next(), blocks.next()) {
        (Some(ending), None, _) => Ok(Layout {
            starting: Vec::new(),
            ending,
        }),
        (Some(starting), Some(ending), None) => Ok(Layout { starting, ending }),
        (None, ..) => Err(invalid_parameter(
            "layout",
            &"<empty>",
            &"layout text holds no symbol grid",
        )),
        (Some(_), Some(_), Some(_)) => Err(invalid_parameter(
            "layout",
            &"<text>",
            &"layout text holds more than two symbol grids",
        )),
    }
}

/// Load a puzzle from a layout file
///
/// # Errors
///
/// Returns `LayoutRead` if the file cannot be read, plus the parsing and
/// construction errors of [`parse_layout`] and [`Layout::into_puzzle`].
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::LayoutRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layout(&text)?.into_puzzle()
}
