use crate::entities::{
    Allowances, BagDimensions, MasterSheet, PackingResult, PatternFootprint, PrintMargins,
};
use crate::packing::pack_plano;
use anyhow::Result;

/// Seller side production settings, shared by all orders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductionSetup {
    pub sheet: MasterSheet,
    pub allowances: Allowances,
    pub margins: PrintMargins,
}

impl ProductionSetup {
    pub fn footprint(&self, bag: &BagDimensions) -> PatternFootprint {
        PatternFootprint::derive(bag, &self.allowances, &self.margins)
    }

    /// Packs the gross tile of `footprint` onto the master sheet.
    pub fn pack(&self, footprint: &PatternFootprint) -> Result<PackingResult> {
        pack_plano(&self.sheet, footprint.gross_width, footprint.gross_height)
    }
}

/// Customer side request: what bag and how many.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub name: String,
    pub bag: BagDimensions,
    pub qty: u64,
}
