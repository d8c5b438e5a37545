use serde::{Deserialize, Serialize};

/// Outer dimensions of the finished (folded) bag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BagDimensions {
    /// Length (P) of the front and back panels
    pub length: f64,
    /// Width (L) of the side gussets
    pub width: f64,
    /// Height (T) of the bag body
    pub height: f64,
}

/// Extra paper added to the flat pattern for assembly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allowances {
    /// Glue tab along the side seam
    pub glue_tab: f64,
    /// Fold-over at the top opening
    pub top_fold: f64,
}

/// Print margins around a single pattern on the master sheet.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PrintMargins {
    /// Total margin added to the pattern width
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total margin added to the pattern height
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
