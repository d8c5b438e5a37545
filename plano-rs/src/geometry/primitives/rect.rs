use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// True if the interiors of `self` and `other` overlap.
    /// Rectangles that only share (part of) an edge, within floating point tolerance, do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(self.x_min) < FPA(other.x_max)
            && FPA(other.x_min) < FPA(self.x_max)
            && FPA(self.y_min) < FPA(other.y_max)
            && FPA(other.y_min) < FPA(self.y_max)
    }

    /// True if `self` lies within `container`, with a tolerance for floating point precision at the boundary.
    pub fn almost_fits_in(&self, container: &Rect) -> bool {
        FPA(self.x_min) >= FPA(container.x_min)
            && FPA(self.y_min) >= FPA(container.y_min)
            && FPA(self.x_max) <= FPA(container.x_max)
            && FPA(self.y_max) <= FPA(container.y_max)
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{MasterSheet, Placement};

    fn tile(x: f64, y: f64, width: f64, height: f64) -> Placement {
        Placement {
            x,
            y,
            width,
            height,
            rotated: false,
        }
    }

    #[test]
    fn touching_tiles_do_not_overlap() {
        let a = tile(0.0, 0.0, 51.0, 31.5).bbox();
        let b = tile(51.0, 0.0, 51.0, 31.5).bbox();
        let c = tile(0.0, 31.5, 51.0, 31.5).bbox();
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&c));
    }

    #[test]
    fn overlapping_tiles_are_detected() {
        let a = tile(0.0, 0.0, 10.0, 10.0).bbox();
        let b = tile(9.0, 9.0, 10.0, 10.0).bbox();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn boundary_rounding_still_fits() {
        let sheet = MasterSheet::try_new(0.3, 1.0).unwrap().bbox();
        let last = tile(0.2, 0.0, 0.1, 1.0).bbox();
        assert!(last.x_max > sheet.x_max);
        assert!(last.almost_fits_in(&sheet));
        assert!(!tile(0.25, 0.0, 0.1, 1.0).bbox().almost_fits_in(&sheet));
    }
}
