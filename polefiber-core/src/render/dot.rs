use std::fmt;

use petgraph::visit::EdgeRef;

use super::text::cost_rows;
use crate::model::{Coordinate, FiberBracket, InstallationMethod};
use crate::report::PlanReport;

/// Width in inches the pole layout is scaled to
const LAYOUT_SIZE: f64 = 8.0;

/// Renders the chain as a Graphviz document with pinned `neato` positions.
///
/// Poles keep their geographic arrangement, edges are colored by fiber bracket
/// and dashed for aerial runs. A legend and the cost table are drawn beside the
/// chain.
pub fn render_dot(report: &PlanReport) -> String {
    DotDiagram(report).to_string()
}

/// Graphviz view of a plan
pub struct DotDiagram<'a>(pub &'a PlanReport);

impl fmt::Display for DotDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let graph = report.chain.to_graph();
        let projection = Projection::fit(report.chain.poles.iter().map(|p| p.location));

        writeln!(f, "graph poles {{")?;
        writeln!(
            f,
            "    graph [layout=neato, label=\"Pole chain with distances and fiber type\", labelloc=t];"
        )?;
        writeln!(
            f,
            "    node [shape=triangle, style=filled, fillcolor=lightblue, fontcolor=darkred, fontsize=10];"
        )?;
        writeln!(f, "    edge [penwidth=2, fontcolor=red, fontsize=9];")?;

        for node in graph.node_indices() {
            let pole = graph[node];
            let (x, y) = projection.apply(pole.location);
            writeln!(
                f,
                "    p{id} [label=\"{id}\", pos=\"{x:.3},{y:.3}!\"];",
                id = pole.id
            )?;
        }

        for edge in graph.edge_references() {
            let conn = edge.weight();
            writeln!(
                f,
                "    p{} -- p{} [color={}, style={}, label=\"{:.2} m\\n{}\"];",
                graph[edge.source()].id,
                graph[edge.target()].id,
                conn.fiber.color(),
                conn.method.line_style(),
                conn.distance,
                conn.fiber
            )?;
        }

        write!(
            f,
            "    legend [shape=plaintext, style=\"\", pos=\"{:.3},{:.3}!\", label=<",
            LAYOUT_SIZE + 2.5,
            LAYOUT_SIZE
        )?;
        write_legend_table(f)?;
        writeln!(f, ">];")?;

        write!(
            f,
            "    costs [shape=plaintext, style=\"\", pos=\"{:.3},{:.3}!\", label=<",
            LAYOUT_SIZE / 2.0,
            -2.0
        )?;
        write_cost_table(f, report)?;
        writeln!(f, ">];")?;

        writeln!(f, "}}")
    }
}

fn write_legend_table(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "<table border=\"1\" cellborder=\"0\"><tr><td colspan=\"2\"><b>Installation type and fiber</b></td></tr>"
    )?;
    for method in InstallationMethod::ALL {
        write!(
            f,
            "<tr><td>{}</td><td>{} line</td></tr>",
            method,
            method.line_style()
        )?;
    }
    for bracket in FiberBracket::ALL {
        write!(
            f,
            "<tr><td bgcolor=\"{}\">&nbsp;&nbsp;&nbsp;</td><td>{}</td></tr>",
            bracket.color(),
            bracket.label()
        )?;
    }
    write!(f, "</table>")
}

fn write_cost_table(f: &mut fmt::Formatter<'_>, report: &PlanReport) -> fmt::Result {
    write!(f, "<table border=\"1\" cellborder=\"1\" cellspacing=\"0\">")?;
    for (idx, row) in cost_rows(report).iter().enumerate() {
        write!(f, "<tr>")?;
        for cell in row {
            if idx == 0 {
                write!(f, "<td><b>{cell}</b></td>")?;
            } else {
                write!(f, "<td>{cell}</td>")?;
            }
        }
        write!(f, "</tr>")?;
    }
    write!(
        f,
        "<tr><td colspan=\"7\"><b>Total cost: ${:.2}</b></td></tr></table>",
        report.total_cost()
    )
}

/// Equirectangular projection scaled to fit the layout box
struct Projection {
    min_lon: f64,
    min_lat: f64,
    lon_factor: f64,
    scale: f64,
}

impl Projection {
    fn fit(locations: impl Iterator<Item = Coordinate>) -> Self {
        let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for loc in locations {
            min_lon = min_lon.min(loc.lon());
            max_lon = max_lon.max(loc.lon());
            min_lat = min_lat.min(loc.lat());
            max_lat = max_lat.max(loc.lat());
        }
        if !min_lon.is_finite() {
            return Self {
                min_lon: 0.0,
                min_lat: 0.0,
                lon_factor: 1.0,
                scale: 1.0,
            };
        }

        let lon_factor = ((min_lat + max_lat) / 2.0).to_radians().cos();
        let span = ((max_lon - min_lon) * lon_factor).max(max_lat - min_lat);
        let scale = if span > 0.0 { LAYOUT_SIZE / span } else { 1.0 };
        Self {
            min_lon,
            min_lat,
            lon_factor,
            scale,
        }
    }

    fn apply(&self, loc: Coordinate) -> (f64, f64) {
        (
            (loc.lon() - self.min_lon) * self.lon_factor * self.scale,
            (loc.lat() - self.min_lat) * self.scale,
        )
    }
}
