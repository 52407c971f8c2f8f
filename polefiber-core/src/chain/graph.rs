use petgraph::graph::{NodeIndex, UnGraph};

use super::PoleChain;
use crate::model::{Connection, Pole};

/// Path graph of a chain: poles as nodes, connections as edges
///
/// Node `i` holds pole `i + 1`.
pub type PoleGraph = UnGraph<Pole, Connection>;

impl PoleChain {
    pub fn to_graph(&self) -> PoleGraph {
        let mut graph =
            PoleGraph::with_capacity(self.poles.len(), self.connections.len());
        for pole in &self.poles {
            graph.add_node(*pole);
        }
        for conn in &self.connections {
            graph.add_edge(
                NodeIndex::new(conn.from - 1),
                NodeIndex::new(conn.to - 1),
                *conn,
            );
        }
        graph
    }
}
