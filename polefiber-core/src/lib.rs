//! Fiber-optic planning for chains of utility poles.
//!
//! Marked pole locations are read from `GeoJSON`, joined into a linear chain,
//! and every span gets a great-circle length, a fiber bracket and an
//! installation method. The chain is then priced and rendered.

pub mod algo;
pub mod chain;
pub mod cost;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod render;
pub mod report;

pub use error::Error;

pub use algo::{haversine, haversine_distance};
pub use chain::{InstallationPlan, PoleChain, build_chain};
pub use cost::{CostBreakdown, CostTable, estimate_costs};
pub use loading::{PointSourceConfig, read_points};
pub use model::{Connection, Coordinate, FiberBracket, InstallationMethod, Pole, PoleId};
pub use report::{PlanReport, plan, plan_from_file};
