mod bag;
mod footprint;
mod layout;
mod order;
mod placement;
mod sheet;

#[doc(inline)]
pub use bag::Allowances;
#[doc(inline)]
pub use bag::BagDimensions;
#[doc(inline)]
pub use bag::PrintMargins;
#[doc(inline)]
pub use footprint::PatternFootprint;
#[doc(inline)]
pub use layout::PackingResult;
#[doc(inline)]
pub use layout::SheetOrientation;
#[doc(inline)]
pub use order::Order;
#[doc(inline)]
pub use order::ProductionSetup;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use sheet::MasterSheet;
