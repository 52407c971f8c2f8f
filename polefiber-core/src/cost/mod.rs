//! Material and installation costing for pole chains

mod estimate;
mod table;

pub use estimate::{ConnectionCost, CostBreakdown, estimate_costs};
pub use table::{CostOverrides, CostTable};
