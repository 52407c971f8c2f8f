//! One-shot planning pipeline: points, chain, costs

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::chain::{InstallationPlan, PoleChain, build_chain};
use crate::cost::{CostBreakdown, CostTable};
use crate::loading::{PointSourceConfig, read_points};
use crate::model::Coordinate;
use crate::Error;

/// A built chain together with its costs
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub chain: PoleChain,
    pub costs: CostBreakdown,
    pub generated_at: DateTime<Utc>,
}

impl PlanReport {
    pub fn total_cost(&self) -> f64 {
        self.costs.total
    }
}

/// Builds and prices the chain for `points`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `installation` does not cover every connection.
pub fn plan(
    points: &[Coordinate],
    installation: &InstallationPlan,
    table: &CostTable,
) -> Result<PlanReport, Error> {
    let chain = build_chain(points, installation)?;
    let costs = chain.costs(table);
    info!(
        "Planned {} poles, {} connections, {:.2} m of fiber, total cost {:.2}",
        chain.pole_count(),
        chain.connection_count(),
        chain.total_length(),
        costs.total
    );
    Ok(PlanReport {
        chain,
        costs,
        generated_at: Utc::now(),
    })
}

/// Reads the point file named by `source` and plans its chain.
///
/// # Errors
///
/// Propagates loader errors and the errors of [`plan`].
pub fn plan_from_file(
    source: &PointSourceConfig,
    installation: &InstallationPlan,
    table: &CostTable,
) -> Result<PlanReport, Error> {
    let points = read_points(source)?;
    plan(&points, installation, table)
}
