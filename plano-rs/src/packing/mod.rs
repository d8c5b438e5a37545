//! Grid packing of identical rectangular tiles onto a master sheet.
//!
//! This is a deterministic heuristic, not an optimal bin packer. Per sheet orientation,
//! a grid of unrotated tiles is packed from the origin, after which the strip that remains
//! to the right of the grid is filled with tiles turned 90°. The leftover along the top edge
//! is never reclaimed. Both sheet orientations are tried and the best one is kept.

mod grid;

#[doc(inline)]
pub use grid::fit_count;
#[doc(inline)]
pub use grid::pack_orientation;
#[doc(inline)]
pub use grid::MAX_PIECES_PER_SHEET;

use crate::entities::{MasterSheet, PackingResult, SheetOrientation};
use anyhow::Result;
use log::debug;

/// Packs as many tiles of `tile_width` x `tile_height` onto `sheet` as the grid heuristic allows.
///
/// The sheet is evaluated as given and turned 90°, the orientation with the most pieces wins.
/// Ties favor the sheet as given.
/// An empty result signals that the tile does not fit on the sheet at all.
/// Fails if either orientation would hold more than [`MAX_PIECES_PER_SHEET`] tiles.
pub fn pack_plano(sheet: &MasterSheet, tile_width: f64, tile_height: f64) -> Result<PackingResult> {
    let as_given = pack_orientation(sheet, tile_width, tile_height)?;
    let swapped_sheet = sheet.rotated();
    let swapped = pack_orientation(&swapped_sheet, tile_width, tile_height)?;

    debug!(
        "[PACK] tile {tile_width}x{tile_height}: {} pieces on {}x{}, {} pieces on {}x{}",
        as_given.len(),
        sheet.width,
        sheet.height,
        swapped.len(),
        swapped_sheet.width,
        swapped_sheet.height
    );

    let result = match as_given.len() >= swapped.len() {
        true => PackingResult {
            placements: as_given,
            sheet: *sheet,
            orientation: SheetOrientation::AsGiven,
        },
        false => PackingResult {
            placements: swapped,
            sheet: swapped_sheet,
            orientation: SheetOrientation::Swapped,
        },
    };

    debug_assert!(crate::util::assertions::placements_within_sheet(
        &result.placements,
        &result.sheet
    ));
    debug_assert!(crate::util::assertions::placements_disjoint(
        &result.placements
    ));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Placement;
    use crate::util::assertions::{placements_disjoint, placements_within_sheet};
    use test_case::test_case;

    fn sheet(w: f64, h: f64) -> MasterSheet {
        MasterSheet::try_new(w, h).unwrap()
    }

    #[test]
    fn reference_bag_on_standard_plano() {
        let result = pack_plano(&sheet(109.0, 79.0), 51.0, 31.5).unwrap();

        // 109 / 51 leaves 7 < 31.5, no leftover strip as given
        let as_given = pack_orientation(&sheet(109.0, 79.0), 51.0, 31.5).unwrap();
        assert_eq!(as_given.len(), 4);
        assert!(as_given.iter().all(|p| !p.rotated));
        let origins: Vec<(f64, f64)> = as_given.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (51.0, 0.0), (0.0, 31.5), (51.0, 31.5)]
        );

        // turned 90°: 79 / 51 = 1 col, 109 / 31.5 = 3 rows, leftover 28 < 31.5
        let swapped = pack_orientation(&sheet(79.0, 109.0), 51.0, 31.5).unwrap();
        assert_eq!(swapped.len(), 3);

        assert_eq!(result.n_pieces(), 4);
        assert_eq!(result.orientation, SheetOrientation::AsGiven);
        assert_eq!(result.sheet, sheet(109.0, 79.0));
    }

    #[test]
    fn leftover_strip_is_filled_with_rotated_tiles() {
        // 100 / 30 = 3 cols, leftover 10 >= 8 -> 1 rotated column of 50 / 30 = 1 row
        let placements = pack_orientation(&sheet(100.0, 50.0), 30.0, 8.0).unwrap();
        let (rotated, primary): (Vec<Placement>, Vec<Placement>) =
            placements.iter().partition(|p| p.rotated);
        assert_eq!(primary.len(), 3 * 6);
        assert_eq!(rotated.len(), 1);
        let r = rotated[0];
        assert_eq!((r.x, r.y, r.width, r.height), (90.0, 0.0, 8.0, 30.0));
        assert!(placements_within_sheet(&placements, &sheet(100.0, 50.0)));
        assert!(placements_disjoint(&placements));
    }

    #[test]
    fn leftover_exactly_tile_height_still_fits() {
        // 2 * 40 = 80, leftover 20 == tile height
        let placements = pack_orientation(&sheet(100.0, 40.0), 40.0, 20.0).unwrap();
        assert_eq!(placements.iter().filter(|p| !p.rotated).count(), 4);
        assert_eq!(placements.iter().filter(|p| p.rotated).count(), 1);
    }

    #[test]
    fn orientation_with_most_pieces_wins() {
        // as given: 10 / 6 = 1 col, 30 / 4 = 7 rows, leftover 4 -> 1 rotated col of 30 / 6 = 5, total 12
        // swapped: 30 / 6 = 5 cols, 10 / 4 = 2 rows, no leftover, total 10
        let result = pack_plano(&sheet(10.0, 30.0), 6.0, 4.0).unwrap();
        assert_eq!(result.orientation, SheetOrientation::AsGiven);
        assert_eq!(result.n_pieces(), 12);

        // as given: 100 / 30 = 3 cols, 50 / 20 = 2 rows, leftover 10 < 20, total 6
        // swapped: 50 / 30 = 1 col, 100 / 20 = 5 rows, leftover 20 -> 1 rotated col of 100 / 30 = 3, total 8
        let turned = pack_plano(&sheet(100.0, 50.0), 30.0, 20.0).unwrap();
        assert_eq!(turned.orientation, SheetOrientation::Swapped);
        assert_eq!(turned.sheet, sheet(50.0, 100.0));
        assert_eq!(turned.n_pieces(), 8);
        assert_eq!(turned.n_rotated(), 3);
    }

    #[test]
    fn ties_favor_the_sheet_as_given() {
        // as given: 20 / 15 = 1 col, 12 / 5 = 2 rows, leftover 5 -> 1 rotated col of 12 / 15 = 0, total 2
        // swapped: 12 / 15 = 0 cols, leftover 12 -> 2 rotated cols of 20 / 15 = 1, total 2
        let tie = pack_plano(&sheet(20.0, 12.0), 15.0, 5.0).unwrap();
        assert_eq!(tie.n_pieces(), 2);
        assert_eq!(tie.orientation, SheetOrientation::AsGiven);
        assert_eq!(tie.n_rotated(), 0);
    }

    #[test]
    fn oversized_tile_yields_nothing() {
        let result = pack_plano(&sheet(109.0, 79.0), 200.0, 200.0).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.n_pieces(), 0);
        assert_eq!(result.orientation, SheetOrientation::AsGiven);
    }

    #[test_case(109.0, 79.0, 51.0, 31.5; "reference bag")]
    #[test_case(100.0, 70.0, 33.3, 12.1; "narrow tile")]
    #[test_case(65.0, 50.0, 21.0, 29.7; "a4 on small plano")]
    #[test_case(120.0, 80.0, 7.3, 19.9; "many small tiles")]
    #[test_case(0.3, 1.0, 0.1, 0.3; "rounding at the boundary")]
    fn packing_is_valid(sheet_w: f64, sheet_h: f64, tile_w: f64, tile_h: f64) {
        let result = pack_plano(&sheet(sheet_w, sheet_h), tile_w, tile_h).unwrap();
        assert!(!result.is_empty());
        assert!(placements_within_sheet(&result.placements, &result.sheet));
        assert!(placements_disjoint(&result.placements));
        assert!(result.efficiency() > 0.0 && result.efficiency() <= 1.0 + 1e-9);

        //the rejected orientation is always the winning sheet turned back
        let rejected = pack_orientation(&result.sheet.rotated(), tile_w, tile_h).unwrap();
        assert!(result.n_pieces() >= rejected.len());
    }

    #[test]
    fn oversized_sheet_fails_instead_of_panicking() {
        assert!(pack_plano(&sheet(1e20, 79.0), 51.0, 31.5).is_err());
        assert!(pack_plano(&sheet(79.0, 1e20), 51.0, 31.5).is_err());
        assert!(pack_plano(&sheet(1e6, 1e6), 1.0, 1.0).is_err());
    }

    #[test]
    fn piece_count_grows_with_the_sheet() {
        let (tile_w, tile_h) = (51.0, 31.5);
        let mut previous = 0;
        for step in 0..40 {
            let size = 30.0 + 5.0 * step as f64;
            let n = pack_plano(&sheet(size, size * 0.75), tile_w, tile_h).unwrap().n_pieces();
            assert!(n >= previous, "{n} pieces on {size}, {previous} on a smaller sheet");
            previous = n;
        }
        assert!(previous > 0);
    }
}
