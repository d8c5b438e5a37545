use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Method to turn the production cost of an order into profit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MarginPolicy {
    /// Percentage of the production cost
    Percentage(f64),
    /// Fixed amount for the whole order, independent of cost or quantity
    FixedTotal(f64),
    /// Fixed amount for every bag
    FixedPerPiece(f64),
}

impl MarginPolicy {
    pub fn value(&self) -> f64 {
        match *self {
            MarginPolicy::Percentage(v)
            | MarginPolicy::FixedTotal(v)
            | MarginPolicy::FixedPerPiece(v) => v,
        }
    }

    pub fn profit(&self, total_cost: f64, qty: u64) -> f64 {
        match *self {
            MarginPolicy::Percentage(pct) => total_cost * pct / 100.0,
            MarginPolicy::FixedTotal(amount) => amount,
            MarginPolicy::FixedPerPiece(amount) => amount * qty as f64,
        }
    }
}

impl Default for MarginPolicy {
    fn default() -> Self {
        MarginPolicy::Percentage(30.0)
    }
}

impl Display for MarginPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MarginPolicy::Percentage(pct) => write!(f, "{pct}%"),
            MarginPolicy::FixedTotal(amount) => write!(f, "{amount} total"),
            MarginPolicy::FixedPerPiece(amount) => write!(f, "{amount} per piece"),
        }
    }
}

/// Profit and resulting selling prices of an order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub profit: f64,
    /// What the customer pays for the whole order
    pub selling_price: f64,
    /// Selling price per bag, 0 for an empty order
    pub unit_price: f64,
}

impl Pricing {
    /// Realized profit as a fraction of the production cost, 0 if nothing was spent.
    pub fn margin_ratio(&self, total_cost: f64) -> f64 {
        match total_cost > 0.0 {
            true => self.profit / total_cost,
            false => 0.0,
        }
    }
}

/// Applies `margin` on top of `total_cost` for an order of `qty` bags.
pub fn price(total_cost: f64, qty: u64, margin: &MarginPolicy) -> Pricing {
    let profit = margin.profit(total_cost, qty);
    let selling_price = total_cost + profit;
    let unit_price = match qty {
        0 => 0.0,
        _ => selling_price / qty as f64,
    };
    debug!("[PRICE] margin {margin}: profit {profit}, selling price {selling_price}, unit price {unit_price}");

    Pricing {
        profit,
        selling_price,
        unit_price,
    }
}
