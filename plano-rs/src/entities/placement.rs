use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// A single pattern tile placed on a master sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// x-coordinate of the bottom-left corner, in sheet coordinates
    pub x: f64,
    /// y-coordinate of the bottom-left corner, in sheet coordinates
    pub y: f64,
    /// Occupied width (the tile height when rotated)
    pub width: f64,
    /// Occupied height (the tile width when rotated)
    pub height: f64,
    /// Whether the tile is turned 90° with respect to the pattern
    pub rotated: bool,
}

impl Placement {
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
