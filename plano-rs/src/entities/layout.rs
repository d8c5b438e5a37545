use crate::entities::{MasterSheet, Placement};
use serde::{Deserialize, Serialize};

/// Orientation of the master sheet in which a layout was computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetOrientation {
    /// Sheet used as given
    AsGiven,
    /// Sheet turned 90°, width and height swapped
    Swapped,
}

/// Outcome of packing pattern tiles onto a single master sheet.
/// Recomputed from scratch whenever the sheet or the footprint changes.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingResult {
    /// Placements in emission order: the primary grid row by row, then the rotated leftover strip
    pub placements: Vec<Placement>,
    /// The sheet in the winning orientation, the placements are expressed in its coordinates
    pub sheet: MasterSheet,
    pub orientation: SheetOrientation,
}

impl PackingResult {
    /// Pieces per plano
    pub fn n_pieces(&self) -> usize {
        self.placements.len()
    }

    /// No tile fits on the sheet in either orientation.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn n_rotated(&self) -> usize {
        self.placements.iter().filter(|p| p.rotated).count()
    }

    /// Fraction of the sheet area covered by the packed tiles (margins included).
    pub fn efficiency(&self) -> f64 {
        let covered: f64 = self.placements.iter().map(|p| p.area()).sum();
        covered / self.sheet.area()
    }
}
