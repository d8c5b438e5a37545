//! Layout and cost engine for flat-folded paper bags cut from plano (master) sheets.
//!
//! The pipeline runs in four pure, synchronous stages:
//! bag dimensions → [`PatternFootprint`](entities::PatternFootprint) →
//! [`pack_plano`](packing::pack_plano) → [`evaluate_costs`](cost::evaluate_costs) →
//! [`price`](pricing::price), tied together by [`evaluate_cost_and_price`](quote::evaluate_cost_and_price).

/// Geometric primitives
pub mod geometry;

/// Entities to model bags, patterns, sheets and layouts
pub mod entities;

/// Grid packing of pattern tiles onto a master sheet
pub mod packing;

/// Evaluation of heterogeneous cost rules
pub mod cost;

/// Margin policies and selling prices
pub mod pricing;

/// Full quotes, combining packing, cost and pricing
pub mod quote;

/// Importing orders and production settings into and exporting quotes out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
