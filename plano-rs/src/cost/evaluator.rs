use crate::cost::{CostBasis, CostRule};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Quantities of an order that drive its cost.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostDrivers {
    /// Number of bags ordered
    pub qty: u64,
    /// Number of master sheets consumed
    pub sheets_required: u64,
    /// Net pattern area of a single bag
    pub area_per_piece: f64,
}

/// Contribution of a single [`CostRule`] to the production cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub name: String,
    pub basis: CostBasis,
    pub subtotal: f64,
}

/// Production cost of an order, itemized in the order of the rules.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CostSummary {
    pub total: f64,
    pub lines: Vec<CostLine>,
}

/// Evaluates every rule against the `drivers` and sums up the subtotals.
///
/// An empty rule list is valid and costs nothing.
pub fn evaluate_costs(rules: &[CostRule], drivers: &CostDrivers) -> CostSummary {
    if rules.is_empty() {
        warn!("[COST] no cost rules configured, production cost is zero");
        return CostSummary::default();
    }

    let mut summary = CostSummary::default();
    for rule in rules {
        if let CostBasis::PerBatch { batch_size: 0 } = rule.basis {
            warn!("[COST] '{}' has a batch size of 0, no batches are charged", rule.name);
        }
        let subtotal = rule.subtotal(drivers);
        debug!("[COST] '{}' ({}): {subtotal}", rule.name, rule.basis);

        summary.total += subtotal;
        summary.lines.push(CostLine {
            name: rule.name.clone(),
            basis: rule.basis,
            subtotal,
        });
    }

    debug_assert!(crate::util::assertions::cost_total_matches_lines(&summary));
    summary
}
