//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

use crate::cost::CostSummary;
use crate::entities::{MasterSheet, Placement};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

pub fn placements_within_sheet(placements: &[Placement], sheet: &MasterSheet) -> bool {
    let bbox = sheet.bbox();
    placements.iter().all(|p| {
        let fits = p.bbox().almost_fits_in(&bbox);
        if !fits {
            error!("placement {p:?} exceeds sheet {sheet:?}");
        }
        fits
    })
}

pub fn placements_disjoint(placements: &[Placement]) -> bool {
    placements.iter().tuple_combinations().all(|(a, b)| {
        let overlap = a.bbox().overlaps(&b.bbox());
        if overlap {
            error!("placements {a:?} and {b:?} overlap");
        }
        !overlap
    })
}

pub fn cost_total_matches_lines(summary: &CostSummary) -> bool {
    let sum: f64 = summary.lines.iter().map(|l| l.subtotal).sum();
    approx_eq!(f64, sum, summary.total, epsilon = 1e-6 * f64::max(1.0, sum.abs()))
}
