use crate::cost::CostDrivers;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the rate of a [`CostRule`] scales with the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostBasis {
    /// Flat amount per order, independent of volume
    FixedPerOrder,
    /// Per master sheet consumed
    PerSheet,
    /// Per bag produced
    PerPiece,
    /// Per unit of net pattern area, for every bag produced
    PerArea,
    /// Per started batch of `batch_size` bags.
    /// A batch size of 0 means no batches and therefore no cost.
    PerBatch { batch_size: u64 },
}

impl CostBasis {
    /// Number of units the rate is multiplied with.
    pub fn units(&self, drivers: &CostDrivers) -> f64 {
        match *self {
            CostBasis::FixedPerOrder => 1.0,
            CostBasis::PerSheet => drivers.sheets_required as f64,
            CostBasis::PerPiece => drivers.qty as f64,
            CostBasis::PerArea => drivers.area_per_piece * drivers.qty as f64,
            CostBasis::PerBatch { batch_size } => match batch_size {
                0 => 0.0,
                _ => drivers.qty.div_ceil(batch_size) as f64,
            },
        }
    }
}

impl Display for CostBasis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CostBasis::FixedPerOrder => write!(f, "fixed per order"),
            CostBasis::PerSheet => write!(f, "per plano sheet"),
            CostBasis::PerPiece => write!(f, "per piece"),
            CostBasis::PerArea => write!(f, "per area"),
            CostBasis::PerBatch { batch_size } => write!(f, "per batch of {batch_size}"),
        }
    }
}

/// A single named cost item, configured by the seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostRule {
    pub name: String,
    pub basis: CostBasis,
    /// Amount charged per unit of the basis
    pub rate: f64,
}

impl CostRule {
    pub fn new(name: impl Into<String>, basis: CostBasis, rate: f64) -> Self {
        CostRule {
            name: name.into(),
            basis,
            rate,
        }
    }

    pub fn subtotal(&self, drivers: &CostDrivers) -> f64 {
        self.rate * self.basis.units(drivers)
    }
}
