use serde::{Deserialize, Serialize};

/// Unit system of the lengths in an external representation.
/// Internally, all lengths are in centimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Centimeters
    #[default]
    Metric,
    /// Inches
    Imperial,
}

impl Unit {
    /// Number of centimeters in one unit of length
    pub fn cm_per_unit(&self) -> f64 {
        match self {
            Unit::Metric => 1.0,
            Unit::Imperial => 2.54,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Metric => "cm",
            Unit::Imperial => "inch",
        }
    }
}

/// Outer dimensions of the bag
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBag {
    /// Length (P)
    pub length: f64,
    /// Width (L)
    pub width: f64,
    /// Height (T)
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtAllowances {
    pub glue_tab: f64,
    pub top_fold: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSheet {
    pub width: f64,
    pub height: f64,
}

/// Production settings of the seller
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtProduction {
    /// Unit of all lengths in this struct
    #[serde(default)]
    pub unit: Unit,
    /// Size of the plano (master) sheet
    pub sheet: ExtSheet,
    pub allowances: ExtAllowances,
    /// Print margins around every pattern
    pub margins: ExtMargins,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtCostBasis {
    FixedPerOrder,
    PerSheet,
    PerPiece,
    /// Rate per cm² of net pattern area
    PerArea,
    PerBatch,
}

/// Cost item, as configured by the seller
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCostRule {
    pub name: String,
    pub basis: ExtCostBasis,
    pub rate: f64,
    /// Pieces per batch, only used by [`ExtCostBasis::PerBatch`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtMarginKind {
    Percentage,
    FixedTotal,
    FixedPerPiece,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtMargin {
    pub kind: ExtMarginKind,
    pub value: f64,
}

/// Order placed by a customer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtOrder {
    /// The name of the order
    pub name: String,
    /// Unit of the bag dimensions
    #[serde(default)]
    pub unit: Unit,
    pub bag: ExtBag,
    /// Number of bags
    pub qty: u64,
}

/// Size of the flat pattern
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPattern {
    pub net_width: f64,
    pub net_height: f64,
    pub gross_width: f64,
    pub gross_height: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// Tiles packed onto a single plano
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    /// The sheet in the orientation the placements refer to
    pub sheet: ExtSheet,
    /// Whether the sheet was turned 90° with respect to the configured one
    pub swapped: bool,
    pub n_pieces: usize,
    pub n_rotated: usize,
    /// Fraction of the sheet covered by tiles
    pub efficiency: f64,
    pub placements: Vec<ExtPlacement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCostLine {
    pub name: String,
    pub basis: ExtCostBasis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u64>,
    pub subtotal: f64,
}

/// Priced order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtQuote {
    /// Unit of all lengths in this struct
    pub unit: Unit,
    pub qty: u64,
    pub pattern: ExtPattern,
    pub layout: ExtLayout,
    pub sheets_required: u64,
    /// Net pattern area of a single bag in cm², regardless of `unit`
    pub area_per_piece: f64,
    /// Itemized production cost, in the order of the cost rules
    pub costs: Vec<ExtCostLine>,
    pub total_cost: f64,
    pub margin: ExtMargin,
    pub profit: f64,
    /// Profit as a fraction of the production cost
    pub margin_ratio: f64,
    pub selling_price: f64,
    pub unit_price: f64,
}
