use crate::config::QuoteConfig;
use anyhow::{Context, Result};
use log::info;
use plano_rs::cost::CostRule;
use plano_rs::entities::{Order, PackingResult, PatternFootprint, ProductionSetup};
use plano_rs::io::export::export_quote;
use plano_rs::io::ext_repr::{ExtOrder, ExtQuote, Unit};
use plano_rs::io::import::{import_cost_rules, import_margin, import_order, import_production};
use plano_rs::io::svg::layout_to_svg;
use plano_rs::pricing::MarginPolicy;
use plano_rs::quote::{Quote, evaluate_cost_and_price};
use svg::Document;

/// A single order, validated and converted to centimeters, together with the seller's settings.
#[derive(Debug, Clone)]
pub struct QuoteJob {
    pub order: Order,
    /// Unit in which the order was placed, results are reported in it
    pub unit: Unit,
    pub setup: ProductionSetup,
    pub rules: Vec<CostRule>,
    pub margin: MarginPolicy,
}

/// Everything computed for a [`QuoteJob`]
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub footprint: PatternFootprint,
    pub packing: PackingResult,
    pub quote: Quote,
}

impl QuoteJob {
    pub fn import(ext_order: &ExtOrder, config: &QuoteConfig) -> Result<Self> {
        let order = import_order(ext_order).context("invalid order")?;
        let setup = import_production(&config.production).context("invalid production settings")?;
        let rules = import_cost_rules(&config.cost_rules)?;
        let margin = import_margin(&config.margin)?;
        Ok(QuoteJob {
            order,
            unit: ext_order.unit,
            setup,
            rules,
            margin,
        })
    }

    /// Runs the full pipeline: pattern, packing, cost and price.
    /// Fails when the pattern does not fit on the plano, no quote is made in that case.
    pub fn run(&self) -> Result<JobOutcome> {
        let footprint = self.setup.footprint(&self.order.bag);
        info!(
            "[JOB] '{}': net pattern {:.2}x{:.2}, tile {:.2}x{:.2} cm",
            self.order.name,
            footprint.net_width,
            footprint.net_height,
            footprint.gross_width,
            footprint.gross_height
        );

        let packing = self.setup.pack(&footprint).with_context(|| {
            format!(
                "plano cannot be laid out for '{}', check the plano size and the units of the order",
                self.order.name
            )
        })?;
        info!(
            "[JOB] {} pcs per plano ({} rotated), {:?} orientation, efficiency {:.1}%",
            packing.n_pieces(),
            packing.n_rotated(),
            packing.orientation,
            packing.efficiency() * 100.0
        );

        let quote = evaluate_cost_and_price(
            &self.rules,
            self.order.qty,
            &packing,
            footprint.net_area(),
            &self.margin,
        )
        .with_context(|| {
            format!(
                "pattern size exceeds plano, adjust the bag dimensions or the plano size (tile {:.2}x{:.2}, plano {:.2}x{:.2})",
                footprint.gross_width,
                footprint.gross_height,
                self.setup.sheet.width,
                self.setup.sheet.height
            )
        })?;

        Ok(JobOutcome {
            footprint,
            packing,
            quote,
        })
    }
}

impl JobOutcome {
    pub fn export(&self, unit: Unit) -> ExtQuote {
        export_quote(&self.quote, &self.footprint, &self.packing, unit)
    }

    pub fn layout_svg(&self, job: &QuoteJob, config: &QuoteConfig) -> Document {
        layout_to_svg(
            &self.packing,
            &self.footprint,
            &job.setup.margins,
            config.svg_draw_options,
            &job.order.name,
        )
    }
}
