//! PNG export of board snapshots
//!
//! The renderer side of the core's boundary: it consumes an immutable
//! snapshot and never mutates board state. Empty cells render transparent,
//! holes as dark wells, and every other tile as a block of its palette
//! color; fixed tiles get a darkened border so obstacles read at a glance.

use image::{ImageBuffer, Rgba};

use crate::board::snapshot::BoardSnapshot;
use crate::board::tile::TileKind;
use crate::io::configuration::CELL_PIXEL_SIZE;
use crate::io::error::{PuzzleError, Result};

const HOLE_RGBA: [u8; 4] = [0, 43, 54, 255];

/// Export the snapshot as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path.
pub fn export_snapshot_as_png(snapshot: &BoardSnapshot, output_path: &str) -> Result<()> {
    let width = snapshot.cols() as u32 * CELL_PIXEL_SIZE;
    let height = snapshot.rows() as u32 * CELL_PIXEL_SIZE;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for (row, col, tile) in snapshot.iter() {
        let Some(tile) = tile else {
            continue;
        };
        let rgba = match tile.kind {
            TileKind::Hole => HOLE_RGBA,
            _ => tile.color.rgba(),
        };
        let border = tile.kind == TileKind::Fixed;

        let origin_x = col as u32 * CELL_PIXEL_SIZE;
        let origin_y = row as u32 * CELL_PIXEL_SIZE;
        for dy in 0..CELL_PIXEL_SIZE {
            for dx in 0..CELL_PIXEL_SIZE {
                let on_edge =
                    dx == 0 || dy == 0 || dx == CELL_PIXEL_SIZE - 1 || dy == CELL_PIXEL_SIZE - 1;
                let pixel = if border && on_edge {
                    Rgba([rgba[0] / 2, rgba[1] / 2, rgba[2] / 2, rgba[3]])
                } else {
                    Rgba(rgba)
                };
                img.put_pixel(origin_x + dx, origin_y + dy, pixel);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| PuzzleError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
