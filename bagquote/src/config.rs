use plano_rs::io::ext_repr::{
    ExtAllowances, ExtCostBasis, ExtCostRule, ExtMargin, ExtMarginKind, ExtMargins,
    ExtProduction, ExtSheet, Unit,
};
use plano_rs::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Seller configuration, shared by every order that is quoted
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuoteConfig {
    /// Plano size, fold allowances and print margins
    pub production: ExtProduction,
    /// Cost items, evaluated and reported in this order
    #[serde(default)]
    pub cost_rules: Vec<ExtCostRule>,
    /// Profit added on top of the production cost
    pub margin: ExtMargin,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            production: ExtProduction {
                unit: Unit::Metric,
                sheet: ExtSheet {
                    width: 109.0,
                    height: 79.0,
                },
                allowances: ExtAllowances {
                    glue_tab: 2.0,
                    top_fold: 2.0,
                },
                margins: ExtMargins {
                    top: 1.0,
                    bottom: 1.0,
                    left: 1.5,
                    right: 1.5,
                },
            },
            cost_rules: vec![
                ExtCostRule {
                    name: "Overhead Cost".to_string(),
                    basis: ExtCostBasis::FixedPerOrder,
                    rate: 100_000.0,
                    batch_size: None,
                },
                ExtCostRule {
                    name: "Packing Cost".to_string(),
                    basis: ExtCostBasis::PerPiece,
                    rate: 500.0,
                    batch_size: None,
                },
            ],
            margin: ExtMargin {
                kind: ExtMarginKind::Percentage,
                value: 30.0,
            },
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
