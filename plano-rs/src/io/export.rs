use crate::cost::{CostBasis, CostLine};
use crate::entities::{PackingResult, PatternFootprint, SheetOrientation};
use crate::io::ext_repr::{
    ExtCostBasis, ExtCostLine, ExtLayout, ExtMargin, ExtMarginKind, ExtPattern, ExtPlacement,
    ExtQuote, ExtSheet, Unit,
};
use crate::io::import::cm_to_unit;
use crate::pricing::MarginPolicy;
use crate::quote::Quote;

pub fn export_pattern(footprint: &PatternFootprint, unit: Unit) -> ExtPattern {
    ExtPattern {
        net_width: cm_to_unit(footprint.net_width, unit),
        net_height: cm_to_unit(footprint.net_height, unit),
        gross_width: cm_to_unit(footprint.gross_width, unit),
        gross_height: cm_to_unit(footprint.gross_height, unit),
    }
}

pub fn export_layout(packing: &PackingResult, unit: Unit) -> ExtLayout {
    ExtLayout {
        sheet: ExtSheet {
            width: cm_to_unit(packing.sheet.width, unit),
            height: cm_to_unit(packing.sheet.height, unit),
        },
        swapped: packing.orientation == SheetOrientation::Swapped,
        n_pieces: packing.n_pieces(),
        n_rotated: packing.n_rotated(),
        efficiency: packing.efficiency(),
        placements: packing
            .placements
            .iter()
            .map(|p| ExtPlacement {
                x: cm_to_unit(p.x, unit),
                y: cm_to_unit(p.y, unit),
                width: cm_to_unit(p.width, unit),
                height: cm_to_unit(p.height, unit),
                rotated: p.rotated,
            })
            .collect(),
    }
}

pub fn export_cost_line(line: &CostLine) -> ExtCostLine {
    let (basis, batch_size) = match line.basis {
        CostBasis::FixedPerOrder => (ExtCostBasis::FixedPerOrder, None),
        CostBasis::PerSheet => (ExtCostBasis::PerSheet, None),
        CostBasis::PerPiece => (ExtCostBasis::PerPiece, None),
        CostBasis::PerArea => (ExtCostBasis::PerArea, None),
        CostBasis::PerBatch { batch_size } => (ExtCostBasis::PerBatch, Some(batch_size)),
    };
    ExtCostLine {
        name: line.name.clone(),
        basis,
        batch_size,
        subtotal: line.subtotal,
    }
}

pub fn export_margin(margin: &MarginPolicy) -> ExtMargin {
    let kind = match margin {
        MarginPolicy::Percentage(_) => ExtMarginKind::Percentage,
        MarginPolicy::FixedTotal(_) => ExtMarginKind::FixedTotal,
        MarginPolicy::FixedPerPiece(_) => ExtMarginKind::FixedPerPiece,
    };
    ExtMargin {
        kind,
        value: margin.value(),
    }
}

/// Exports a quote out of the library, lengths expressed in `unit`.
pub fn export_quote(
    quote: &Quote,
    footprint: &PatternFootprint,
    packing: &PackingResult,
    unit: Unit,
) -> ExtQuote {
    ExtQuote {
        unit,
        qty: quote.plan.qty,
        pattern: export_pattern(footprint, unit),
        layout: export_layout(packing, unit),
        sheets_required: quote.plan.sheets_required,
        area_per_piece: quote.plan.area_per_piece,
        costs: quote.costs.lines.iter().map(export_cost_line).collect(),
        total_cost: quote.total_cost(),
        margin: export_margin(&quote.margin),
        profit: quote.profit(),
        margin_ratio: quote.margin_ratio(),
        selling_price: quote.selling_price(),
        unit_price: quote.unit_price(),
    }
}
