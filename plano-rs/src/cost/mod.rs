mod evaluator;
mod rule;

#[doc(inline)]
pub use evaluator::CostDrivers;
#[doc(inline)]
pub use evaluator::CostLine;
#[doc(inline)]
pub use evaluator::CostSummary;
#[doc(inline)]
pub use evaluator::evaluate_costs;
#[doc(inline)]
pub use rule::CostBasis;
#[doc(inline)]
pub use rule::CostRule;
