// Re-export key components
pub use crate::Error;
pub use crate::algo::{EARTH_RADIUS_KM, haversine, haversine_distance};
pub use crate::chain::{InstallationPlan, PoleChain, PoleGraph, build_chain};
pub use crate::cost::{ConnectionCost, CostBreakdown, CostOverrides, CostTable, estimate_costs};
pub use crate::loading::{PointSourceConfig, points_from_geojson, points_from_str, read_points};
pub use crate::render::{render_dot, render_legend, render_text};
pub use crate::report::{PlanReport, plan, plan_from_file};

// Core model types
pub use crate::model::{Connection, Coordinate, FiberBracket, InstallationMethod, Pole, PoleId};
