use crate::cost::{CostBasis, CostRule};
use crate::entities::{
    Allowances, BagDimensions, MasterSheet, Order, PrintMargins, ProductionSetup,
};
use crate::io::ext_repr::{
    ExtCostBasis, ExtCostRule, ExtMargin, ExtMarginKind, ExtOrder, ExtProduction, Unit,
};
use crate::pricing::MarginPolicy;
use anyhow::{Context, Result, ensure};

/// Converts an external order into an internal one, lengths in centimeters.
/// Rejects non-positive bag dimensions and empty orders.
pub fn import_order(ext_order: &ExtOrder) -> Result<Order> {
    let cm = ext_order.unit.cm_per_unit();
    let ext_bag = &ext_order.bag;
    for (name, value) in [
        ("length", ext_bag.length),
        ("width", ext_bag.width),
        ("height", ext_bag.height),
    ] {
        ensure!(
            value > 0.0,
            "bag {name} must be positive, got {value} {}",
            ext_order.unit.symbol()
        );
    }
    ensure!(ext_order.qty >= 1, "order '{}' has no quantity", ext_order.name);

    Ok(Order {
        name: ext_order.name.clone(),
        bag: BagDimensions {
            length: ext_bag.length * cm,
            width: ext_bag.width * cm,
            height: ext_bag.height * cm,
        },
        qty: ext_order.qty,
    })
}

/// Converts external production settings into internal ones, lengths in centimeters.
pub fn import_production(ext_prod: &ExtProduction) -> Result<ProductionSetup> {
    let unit = ext_prod.unit;
    let cm = unit.cm_per_unit();

    let sheet = MasterSheet::try_new(ext_prod.sheet.width * cm, ext_prod.sheet.height * cm)
        .context("invalid plano size")?;

    let ext_allow = &ext_prod.allowances;
    ensure!(
        ext_allow.glue_tab > 0.0,
        "glue tab must be positive, got {} {}",
        ext_allow.glue_tab,
        unit.symbol()
    );
    ensure!(
        ext_allow.top_fold >= 0.0,
        "top fold cannot be negative, got {} {}",
        ext_allow.top_fold,
        unit.symbol()
    );

    let ext_margins = &ext_prod.margins;
    for (side, value) in [
        ("top", ext_margins.top),
        ("bottom", ext_margins.bottom),
        ("left", ext_margins.left),
        ("right", ext_margins.right),
    ] {
        ensure!(
            value >= 0.0,
            "{side} margin cannot be negative, got {value} {}",
            unit.symbol()
        );
    }

    Ok(ProductionSetup {
        sheet,
        allowances: Allowances {
            glue_tab: ext_allow.glue_tab * cm,
            top_fold: ext_allow.top_fold * cm,
        },
        margins: PrintMargins {
            top: ext_margins.top * cm,
            bottom: ext_margins.bottom * cm,
            left: ext_margins.left * cm,
            right: ext_margins.right * cm,
        },
    })
}

pub fn import_cost_rule(ext_rule: &ExtCostRule) -> Result<CostRule> {
    ensure!(!ext_rule.name.trim().is_empty(), "cost rule name is required");
    ensure!(
        ext_rule.rate >= 0.0,
        "cost rule '{}' has a negative rate: {}",
        ext_rule.name,
        ext_rule.rate
    );

    let basis = match ext_rule.basis {
        ExtCostBasis::FixedPerOrder => CostBasis::FixedPerOrder,
        ExtCostBasis::PerSheet => CostBasis::PerSheet,
        ExtCostBasis::PerPiece => CostBasis::PerPiece,
        ExtCostBasis::PerArea => CostBasis::PerArea,
        ExtCostBasis::PerBatch => CostBasis::PerBatch {
            batch_size: ext_rule.batch_size.unwrap_or(0),
        },
    };

    Ok(CostRule::new(ext_rule.name.clone(), basis, ext_rule.rate))
}

/// Imports all rules, preserving their order.
pub fn import_cost_rules(ext_rules: &[ExtCostRule]) -> Result<Vec<CostRule>> {
    ext_rules
        .iter()
        .enumerate()
        .map(|(i, r)| import_cost_rule(r).with_context(|| format!("cost rule #{i}")))
        .collect()
}

pub fn import_margin(ext_margin: &ExtMargin) -> Result<MarginPolicy> {
    ensure!(
        ext_margin.value >= 0.0,
        "margin value cannot be negative, got {}",
        ext_margin.value
    );
    let margin = match ext_margin.kind {
        ExtMarginKind::Percentage => MarginPolicy::Percentage(ext_margin.value),
        ExtMarginKind::FixedTotal => MarginPolicy::FixedTotal(ext_margin.value),
        ExtMarginKind::FixedPerPiece => MarginPolicy::FixedPerPiece(ext_margin.value),
    };
    Ok(margin)
}

/// Converts a length in centimeters into `unit`.
pub fn cm_to_unit(value: f64, unit: Unit) -> f64 {
    value / unit.cm_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtAllowances, ExtBag, ExtMargins, ExtSheet};
    use float_cmp::approx_eq;

    fn ext_production(unit: Unit) -> ExtProduction {
        ExtProduction {
            unit,
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
        }
    }

    #[test]
    fn imperial_lengths_are_converted() {
        let order = ExtOrder {
            name: "tote".into(),
            unit: Unit::Imperial,
            bag: ExtBag {
                length: 10.0,
                width: 4.0,
                height: 12.0,
            },
            qty: 500,
        };
        let order = import_order(&order).unwrap();
        assert!(approx_eq!(f64, order.bag.length, 25.4, epsilon = 1e-9));
        assert!(approx_eq!(f64, order.bag.width, 10.16, epsilon = 1e-9));
        assert!(approx_eq!(f64, order.bag.height, 30.48, epsilon = 1e-9));

        let setup = import_production(&ext_production(Unit::Imperial)).unwrap();
        assert!(approx_eq!(f64, setup.sheet.width, 276.86, epsilon = 1e-9));
        assert!(approx_eq!(f64, setup.margins.left, 3.81, epsilon = 1e-9));
        assert!(approx_eq!(f64, cm_to_unit(setup.sheet.width, Unit::Imperial), 109.0, epsilon = 1e-9));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let order = ExtOrder {
            name: "flat".into(),
            unit: Unit::Metric,
            bag: ExtBag {
                length: 15.0,
                width: 0.0,
                height: 20.0,
            },
            qty: 1000,
        };
        assert!(import_order(&order).is_err());

        let empty = ExtOrder {
            bag: ExtBag {
                width: 8.0,
                ..order.bag
            },
            qty: 0,
            ..order
        };
        assert!(import_order(&empty).is_err());

        let mut prod = ext_production(Unit::Metric);
        prod.margins.left = -1.0;
        assert!(import_production(&prod).is_err());

        let mut prod = ext_production(Unit::Metric);
        prod.sheet.height = 0.0;
        assert!(import_production(&prod).is_err());

        let negative = ExtCostRule {
            name: "Paper".into(),
            basis: ExtCostBasis::PerArea,
            rate: -0.5,
            batch_size: None,
        };
        assert!(import_cost_rules(&[negative]).is_err());

        let margin = ExtMargin {
            kind: ExtMarginKind::FixedTotal,
            value: -10.0,
        };
        assert!(import_margin(&margin).is_err());
    }

    #[test]
    fn missing_batch_size_means_no_batches() {
        let rule = ExtCostRule {
            name: "Glueing".into(),
            basis: ExtCostBasis::PerBatch,
            rate: 20_000.0,
            batch_size: None,
        };
        let rule = import_cost_rule(&rule).unwrap();
        assert_eq!(rule.basis, CostBasis::PerBatch { batch_size: 0 });

        let per_piece = ExtCostRule {
            name: "Packing".into(),
            basis: ExtCostBasis::PerPiece,
            rate: 500.0,
            batch_size: Some(100),
        };
        assert_eq!(import_cost_rule(&per_piece).unwrap().basis, CostBasis::PerPiece);
    }

    #[test]
    fn cost_rules_deserialize_from_json() {
        let json = r#"[
            {"name": "Overhead Cost", "basis": "fixed_per_order", "rate": 100000},
            {"name": "Setup", "basis": "per_batch", "rate": 50000, "batch_size": 2000}
        ]"#;
        let ext_rules: Vec<ExtCostRule> = serde_json::from_str(json).unwrap();
        let rules = import_cost_rules(&ext_rules).unwrap();
        assert_eq!(rules[0].basis, CostBasis::FixedPerOrder);
        assert_eq!(rules[1].basis, CostBasis::PerBatch { batch_size: 2000 });
    }
}
