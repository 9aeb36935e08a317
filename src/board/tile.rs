//! Tile records and their classification
//!
//! Every tile carries a stable identity, an authoritative position, a color
//! from a fixed palette, and a kind. The kind is a closed variant set matched
//! exhaustively by the tilt engine, so a new kind cannot be added without
//! updating every slide rule.

use std::fmt;

use crate::io::configuration::{HOLE_SYMBOL, ROUGH_SYMBOL};

/// Stable tile identity, unique within a board
///
/// Identities survive board cloning, which lets simulations compare a tile
/// before and after a tilt by identity rather than by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// Color palette for tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    /// Symbol `r`
    Red,
    /// Symbol `b`
    Blue,
    /// Symbol `y`
    Yellow,
    /// Symbol `g`
    Green,
    /// Rough and hole tiles, no dedicated color symbol
    Gray,
}

impl TileColor {
    /// Map a lowercase color symbol to a palette entry
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Self::Red),
            'b' => Some(Self::Blue),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            _ => None,
        }
    }

    /// Lowercase symbol for this color
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Gray => '?',
        }
    }

    /// Opaque RGBA value used by the PNG exporter
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [220, 50, 47, 255],
            Self::Blue => [38, 139, 210, 255],
            Self::Yellow => [181, 137, 0, 255],
            Self::Green => [133, 153, 0, 255],
            Self::Gray => [88, 110, 117, 255],
        }
    }
}

/// Behavior class of a tile during a tilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Slides freely until blocked
    Normal,
    /// Never moves, rejects deletion and relocation
    Fixed,
    /// Never moves; sliding tiles stop adjacent to it
    Rough,
    /// Stationary; absorbs the first tile that slides onto it
    Hole,
}

impl TileKind {
    /// Whether the tilt engine may select this tile as the one being moved
    pub const fn is_movable(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether this kind may join a glue group
    pub const fn can_glue(self) -> bool {
        !matches!(self, Self::Hole)
    }
}

/// A tile on the board
///
/// The position is authoritative and kept consistent with the cell holding
/// the tile; the board updates it on every relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Stable identity within the owning board
    pub id: TileId,
    /// Current row
    pub row: usize,
    /// Current column
    pub col: usize,
    /// Palette color
    pub color: TileColor,
    /// Behavior class
    pub kind: TileKind,
}

impl Tile {
    /// Decode a layout symbol into color and kind
    ///
    /// Lowercase letters are normal colored tiles, uppercase letters fixed
    /// colored tiles, `#` a rough tile, and `o` a hole. The empty symbol is
    /// handled by the layout parser, not here.
    pub fn attributes_from_symbol(symbol: char) -> Option<(TileColor, TileKind)> {
        match symbol {
            ROUGH_SYMBOL => Some((TileColor::Gray, TileKind::Rough)),
            HOLE_SYMBOL => Some((TileColor::Gray, TileKind::Hole)),
            c if c.is_ascii_uppercase() => {
                TileColor::from_symbol(c.to_ascii_lowercase()).map(|color| (color, TileKind::Fixed))
            }
            c => TileColor::from_symbol(c).map(|color| (color, TileKind::Normal)),
        }
    }

    /// Layout symbol for this tile
    pub const fn symbol(&self) -> char {
        match self.kind {
            TileKind::Rough => ROUGH_SYMBOL,
            TileKind::Hole => HOLE_SYMBOL,
            TileKind::Fixed => self.color.symbol().to_ascii_uppercase(),
            TileKind::Normal => self.color.symbol(),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} tile #{} at ({}, {})",
            self.color, self.kind, self.id.0, self.row, self.col
        )
    }
}
