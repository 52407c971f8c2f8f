use serde::Serialize;

use super::CostTable;
use crate::model::{Connection, FiberBracket, InstallationMethod, PoleId};

/// Itemized cost of a single connection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionCost {
    pub from: PoleId,
    pub to: PoleId,
    pub distance: f64,
    pub fiber: FiberBracket,
    pub method: InstallationMethod,
    pub fiber_cost: f64,
    pub installation_cost: f64,
}

impl ConnectionCost {
    pub fn total(&self) -> f64 {
        self.fiber_cost + self.installation_cost
    }
}

/// Costs of a whole chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub items: Vec<ConnectionCost>,
    /// Number of poles charged the fixture price
    pub poles_charged: usize,
    pub pole_cost: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn fiber_total(&self) -> f64 {
        self.items.iter().map(|item| item.fiber_cost).sum()
    }

    pub fn installation_total(&self) -> f64 {
        self.items.iter().map(|item| item.installation_cost).sum()
    }
}

/// Prices every connection and adds the pole fixtures.
///
/// A chain of `n` connections charges `n + 1` poles. An empty chain costs
/// nothing, not even a single pole.
pub fn estimate_costs(connections: &[Connection], table: &CostTable) -> CostBreakdown {
    let items: Vec<ConnectionCost> = connections
        .iter()
        .map(|conn| ConnectionCost {
            from: conn.from,
            to: conn.to,
            distance: conn.distance,
            fiber: conn.fiber,
            method: conn.method,
            fiber_cost: table.fiber_rate(conn.fiber) * conn.distance,
            installation_cost: table.installation_rate(conn.method) * conn.distance,
        })
        .collect();

    let poles_charged = if items.is_empty() { 0 } else { items.len() + 1 };
    #[allow(clippy::cast_precision_loss)]
    let pole_cost = table.pole_price() * poles_charged as f64;
    let total = items.iter().map(ConnectionCost::total).sum::<f64>() + pole_cost;

    CostBreakdown {
        items,
        poles_charged,
        pole_cost,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(from: PoleId, distance: f64, method: InstallationMethod) -> Connection {
        Connection {
            from,
            to: from + 1,
            distance,
            fiber: FiberBracket::classify(distance),
            method,
        }
    }

    #[test]
    fn zero_length_span_costs_only_poles() {
        let costs = estimate_costs(
            &[connection(1, 0.0, InstallationMethod::Aerial)],
            &CostTable::default(),
        );
        assert_eq!(costs.items[0].fiber_cost, 0.0);
        assert_eq!(costs.items[0].installation_cost, 0.0);
        assert_eq!(costs.poles_charged, 2);
        assert!((costs.total - 200.0).abs() < 1e-9);
    }

    #[test]
    fn sums_fiber_installation_and_poles() {
        let connections = [
            connection(1, 40.0, InstallationMethod::Aerial),
            connection(2, 100.0, InstallationMethod::Underground),
        ];
        let costs = estimate_costs(&connections, &CostTable::default());

        // 40 m of "Fibra 50m" aerial, 100 m of "Fibra 100m" underground
        assert!((costs.items[0].fiber_cost - 18.0).abs() < 1e-9);
        assert!((costs.items[0].installation_cost - 40.0).abs() < 1e-9);
        assert!((costs.items[1].fiber_cost - 35.0).abs() < 1e-9);
        assert!((costs.items[1].installation_cost - 250.0).abs() < 1e-9);
        assert_eq!(costs.poles_charged, 3);
        assert!((costs.pole_cost - 300.0).abs() < 1e-9);
        assert!((costs.total - (18.0 + 40.0 + 35.0 + 250.0 + 300.0)).abs() < 1e-9);
        assert!((costs.fiber_total() - 53.0).abs() < 1e-9);
        assert!((costs.installation_total() - 290.0).abs() < 1e-9);
    }

    #[test]
    fn empty_chain_is_free() {
        let costs = estimate_costs(&[], &CostTable::default());
        assert!(costs.items.is_empty());
        assert_eq!(costs.poles_charged, 0);
        assert_eq!(costs.total, 0.0);
    }
}
