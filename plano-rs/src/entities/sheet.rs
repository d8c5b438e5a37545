use crate::geometry::primitives::Rect;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Plano: the raw stock sheet from which the bag patterns are cut.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MasterSheet {
    pub width: f64,
    pub height: f64,
}

impl MasterSheet {
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "invalid master sheet, width: {width}, height: {height}"
        );
        Ok(MasterSheet { width, height })
    }

    /// The same sheet turned 90°.
    pub fn rotated(&self) -> Self {
        MasterSheet {
            width: self.height,
            height: self.width,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
