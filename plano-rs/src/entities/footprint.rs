use crate::entities::{Allowances, BagDimensions, PrintMargins};
use serde::{Deserialize, Serialize};

/// Size of the flat die-cut pattern of a bag, with and without print margins.
///
/// The pattern is laid out as `glue tab | gusset | panel | gusset | panel` horizontally,
/// and `bottom flaps (P/2) | body (T) | top fold` vertically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatternFootprint {
    pub net_width: f64,
    pub net_height: f64,
    /// Width of the tile that is packed onto the sheet (net pattern + left and right margins)
    pub gross_width: f64,
    /// Height of the tile that is packed onto the sheet (net pattern + top and bottom margins)
    pub gross_height: f64,
}

impl PatternFootprint {
    /// Derives the footprint of the flat pattern.
    /// Assumes sane input: positive bag dimensions and glue tab, non-negative top fold and margins.
    pub fn derive(bag: &BagDimensions, allowances: &Allowances, margins: &PrintMargins) -> Self {
        let net_width = allowances.glue_tab + 2.0 * bag.width + 2.0 * bag.length;
        let net_height = bag.height + allowances.top_fold + 0.5 * bag.length;

        let footprint = PatternFootprint {
            net_width,
            net_height,
            gross_width: net_width + margins.horizontal(),
            gross_height: net_height + margins.vertical(),
        };
        debug_assert!(
            footprint.net_width > 0.0 && footprint.net_height > 0.0,
            "non-positive pattern footprint: {footprint:?}"
        );
        footprint
    }

    /// Area of the net pattern, the paper that actually ends up in one bag.
    pub fn net_area(&self) -> f64 {
        self.net_width * self.net_height
    }

    /// Area of a single tile on the sheet, margins included.
    pub fn gross_area(&self) -> f64 {
        self.gross_width * self.gross_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn reference_bag() -> (BagDimensions, Allowances, PrintMargins) {
        (
            BagDimensions {
                length: 15.0,
                width: 8.0,
                height: 20.0,
            },
            Allowances {
                glue_tab: 2.0,
                top_fold: 2.0,
            },
            PrintMargins {
                top: 1.0,
                bottom: 1.0,
                left: 1.5,
                right: 1.5,
            },
        )
    }

    #[test]
    fn derives_net_and_gross_size() {
        let (bag, allowances, margins) = reference_bag();
        let fp = PatternFootprint::derive(&bag, &allowances, &margins);
        assert_eq!(fp.net_width, 48.0);
        assert_eq!(fp.net_height, 29.5);
        assert_eq!(fp.gross_width, 51.0);
        assert_eq!(fp.gross_height, 31.5);
        assert!(approx_eq!(f64, fp.net_area(), 1416.0));
        assert!(approx_eq!(f64, fp.gross_area(), 1606.5));
    }

    #[test]
    fn zero_margins_and_fold_are_allowed() {
        let (bag, allowances, _) = reference_bag();
        let allowances = Allowances {
            top_fold: 0.0,
            ..allowances
        };
        let fp = PatternFootprint::derive(&bag, &allowances, &PrintMargins::default());
        assert_eq!(fp.net_height, 27.5);
        assert_eq!(fp.gross_width, fp.net_width);
        assert_eq!(fp.gross_height, fp.net_height);
    }
}
