use log::debug;
use serde::{Deserialize, Serialize};

use crate::algo::haversine_distance;
use crate::cost::{CostBreakdown, CostTable, estimate_costs};
use crate::model::{Connection, Coordinate, FiberBracket, InstallationMethod, Pole};
use crate::Error;

/// Installation choices for every connection of a chain, resolved up front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationPlan {
    /// The same method for every connection
    Uniform(InstallationMethod),
    /// One method per connection, in chain order
    PerConnection(Vec<InstallationMethod>),
}

impl InstallationPlan {
    /// Expands the plan to exactly `connections` methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a per-connection list has the wrong length.
    pub fn resolve(&self, connections: usize) -> Result<Vec<InstallationMethod>, Error> {
        match self {
            InstallationPlan::Uniform(method) => Ok(vec![*method; connections]),
            InstallationPlan::PerConnection(methods) if methods.len() == connections => {
                Ok(methods.clone())
            }
            InstallationPlan::PerConnection(methods) => Err(Error::InvalidInput(format!(
                "{} installation methods given for {connections} connections",
                methods.len()
            ))),
        }
    }
}

impl Default for InstallationPlan {
    fn default() -> Self {
        InstallationPlan::Uniform(InstallationMethod::Aerial)
    }
}

/// Poles in marking order and the connections between neighbours
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoleChain {
    pub poles: Vec<Pole>,
    pub connections: Vec<Connection>,
}

impl PoleChain {
    pub fn pole_count(&self) -> usize {
        self.poles.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Sum of all connection lengths in meters
    pub fn total_length(&self) -> f64 {
        self.connections.iter().map(|c| c.distance).sum()
    }

    pub fn costs(&self, table: &CostTable) -> CostBreakdown {
        estimate_costs(&self.connections, table)
    }
}

/// Builds the chain for `points` taken in the given order.
///
/// Fewer than two points give a chain without connections.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `plan` does not cover every connection.
pub fn build_chain(points: &[Coordinate], plan: &InstallationPlan) -> Result<PoleChain, Error> {
    let poles: Vec<Pole> = points
        .iter()
        .enumerate()
        .map(|(idx, &location)| Pole {
            id: idx + 1,
            location,
        })
        .collect();

    let methods = plan.resolve(poles.len().saturating_sub(1))?;

    let connections: Vec<Connection> = poles
        .windows(2)
        .zip(methods)
        .map(|(pair, method)| {
            let (from, to) = (pair[0], pair[1]);
            let distance = haversine_distance(from.location, to.location);
            let fiber = FiberBracket::classify(distance);
            debug!(
                "Pole {} - Pole {}: {distance:.2} m, {fiber}, {method}",
                from.id, to.id
            );
            Connection {
                from: from.id,
                to: to.id,
                distance,
                fiber,
                method,
            }
        })
        .collect();

    Ok(PoleChain { poles, connections })
}
