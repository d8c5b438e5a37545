use crate::cost::{CostDrivers, CostRule, CostSummary, evaluate_costs};
use crate::entities::PackingResult;
use crate::pricing::{MarginPolicy, Pricing, price};
use anyhow::{Result, ensure};
use log::info;

/// Material requirements of an order, derived from a packed master sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductionPlan {
    /// Number of bags ordered
    pub qty: u64,
    pub pieces_per_sheet: usize,
    /// Master sheets needed to produce `qty` bags
    pub sheets_required: u64,
    /// Fraction of a master sheet covered by pattern tiles
    pub efficiency: f64,
    /// Net pattern area of a single bag
    pub area_per_piece: f64,
}

impl ProductionPlan {
    /// Fails if nothing could be packed: the pattern is larger than the available stock
    /// and no cost or price is meaningful.
    pub fn new(qty: u64, packing: &PackingResult, area_per_piece: f64) -> Result<Self> {
        ensure!(
            !packing.is_empty(),
            "pattern does not fit on a {}x{} master sheet in either orientation",
            packing.sheet.width,
            packing.sheet.height
        );
        let pieces_per_sheet = packing.n_pieces();
        Ok(ProductionPlan {
            qty,
            pieces_per_sheet,
            sheets_required: qty.div_ceil(pieces_per_sheet as u64),
            efficiency: packing.efficiency(),
            area_per_piece,
        })
    }

    pub fn drivers(&self) -> CostDrivers {
        CostDrivers {
            qty: self.qty,
            sheets_required: self.sheets_required,
            area_per_piece: self.area_per_piece,
        }
    }
}

/// Priced order: production plan, itemized cost and selling price.
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub plan: ProductionPlan,
    pub costs: CostSummary,
    pub margin: MarginPolicy,
    pub pricing: Pricing,
}

impl Quote {
    pub fn total_cost(&self) -> f64 {
        self.costs.total
    }

    pub fn profit(&self) -> f64 {
        self.pricing.profit
    }

    pub fn selling_price(&self) -> f64 {
        self.pricing.selling_price
    }

    pub fn unit_price(&self) -> f64 {
        self.pricing.unit_price
    }

    /// Realized profit as a fraction of the production cost
    pub fn margin_ratio(&self) -> f64 {
        self.pricing.margin_ratio(self.costs.total)
    }
}

/// Prices an order of `qty` bags, produced from sheets packed as in `packing`.
///
/// `rules` is a read-only snapshot of the seller's cost configuration.
/// Returns an error if `packing` is empty, the pipeline must halt in that case.
pub fn evaluate_cost_and_price(
    rules: &[CostRule],
    qty: u64,
    packing: &PackingResult,
    area_per_piece: f64,
    margin: &MarginPolicy,
) -> Result<Quote> {
    let plan = ProductionPlan::new(qty, packing, area_per_piece)?;
    let costs = evaluate_costs(rules, &plan.drivers());
    let pricing = price(costs.total, qty, margin);

    info!(
        "[QUOTE] {qty} pcs, {} pcs/sheet, {} sheets, cost {:.2}, selling price {:.2} ({:.2}/pc)",
        plan.pieces_per_sheet,
        plan.sheets_required,
        costs.total,
        pricing.selling_price,
        pricing.unit_price
    );

    Ok(Quote {
        plan,
        costs,
        margin: *margin,
        pricing,
    })
}
