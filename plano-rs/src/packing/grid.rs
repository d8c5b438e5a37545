use crate::entities::{MasterSheet, Placement};
use crate::util::FPA;
use anyhow::{Result, bail};

/// Most tiles a single master sheet is allowed to hold.
/// Anything beyond this is a unit or input error, not a bag pattern.
pub const MAX_PIECES_PER_SHEET: usize = 10_000;

/// Number of times `tile` fits along `length`.
///
/// Floor division of continuous lengths, where a quotient within floating point tolerance
/// of the next integer counts as a fit (e.g. three tiles of 0.1 on a length of 0.3).
/// Saturates at `usize::MAX` for quotients beyond its range.
pub fn fit_count(length: f64, tile: f64) -> usize {
    let ratio = length / tile;
    let fits = match FPA(ratio) == FPA(ratio.ceil()) {
        true => ratio.ceil(),
        false => ratio.floor(),
    };
    fits.max(0.0) as usize
}

/// Tile counts of the primary grid and of the rotated leftover strip for one sheet orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GridLayout {
    cols: usize,
    rows: usize,
    strip_cols: usize,
    strip_rows: usize,
}

impl GridLayout {
    fn new(sheet: &MasterSheet, tile_width: f64, tile_height: f64) -> Self {
        let cols = fit_count(sheet.width, tile_width);
        let rows = fit_count(sheet.height, tile_height);
        let remaining_width = f64::max(sheet.width - cols as f64 * tile_width, 0.0);
        let (strip_cols, strip_rows) = match FPA(remaining_width) >= FPA(tile_height) {
            true => (
                fit_count(remaining_width, tile_height),
                fit_count(sheet.height, tile_width),
            ),
            false => (0, 0),
        };
        GridLayout {
            cols,
            rows,
            strip_cols,
            strip_rows,
        }
    }

    /// `None` if the count does not fit in a `usize`
    fn n_pieces(&self) -> Option<usize> {
        let primary = self.cols.checked_mul(self.rows)?;
        let strip = self.strip_cols.checked_mul(self.strip_rows)?;
        primary.checked_add(strip)
    }
}

/// Packs tiles of `tile_width` x `tile_height` onto `sheet` in the orientation given.
///
/// First an unrotated grid is laid out from the origin, row by row. If the strip to the right
/// of that grid is at least `tile_height` wide, it is filled with tiles turned 90°.
///
/// Fails if more than [`MAX_PIECES_PER_SHEET`] tiles would be placed.
pub fn pack_orientation(
    sheet: &MasterSheet,
    tile_width: f64,
    tile_height: f64,
) -> Result<Vec<Placement>> {
    let layout = GridLayout::new(sheet, tile_width, tile_height);
    let Some(n_pieces) = layout.n_pieces().filter(|n| *n <= MAX_PIECES_PER_SHEET) else {
        bail!(
            "a {tile_width}x{tile_height} tile fits more than {MAX_PIECES_PER_SHEET} times on a {}x{} sheet",
            sheet.width,
            sheet.height
        );
    };

    let mut placements = Vec::with_capacity(n_pieces);
    for r in 0..layout.rows {
        for c in 0..layout.cols {
            placements.push(Placement {
                x: c as f64 * tile_width,
                y: r as f64 * tile_height,
                width: tile_width,
                height: tile_height,
                rotated: false,
            });
        }
    }

    //leftover strip, tiles turned 90°
    let grid_width = layout.cols as f64 * tile_width;
    for r in 0..layout.strip_rows {
        for c in 0..layout.strip_cols {
            placements.push(Placement {
                x: grid_width + c as f64 * tile_height,
                y: r as f64 * tile_width,
                width: tile_height,
                height: tile_width,
                rotated: true,
            });
        }
    }

    Ok(placements)
}
