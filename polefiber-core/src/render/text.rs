use std::fmt;

use crate::cost::CostTable;
use crate::model::{FiberBracket, InstallationMethod};
use crate::report::PlanReport;

const HEADERS: [&str; 7] = [
    "Start pole",
    "End pole",
    "Distance (m)",
    "Fiber",
    "Installation",
    "Fiber cost ($)",
    "Installation cost ($)",
];

/// Console listing of a plan: one line per connection, the cost table and the total
pub fn render_text(report: &PlanReport) -> String {
    report.to_string()
}

/// Cost table rows as display strings, header first
pub(crate) fn cost_rows(report: &PlanReport) -> Vec<[String; 7]> {
    let mut rows = vec![HEADERS.map(str::to_string)];
    rows.extend(report.costs.items.iter().map(|item| {
        [
            item.from.to_string(),
            item.to.to_string(),
            format!("{:.2}", item.distance),
            item.fiber.to_string(),
            item.method.to_string(),
            format!("{:.2}", item.fiber_cost),
            format!("{:.2}", item.installation_cost),
        ]
    }));
    rows
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distances between poles and fiber type:")?;
        for conn in &self.chain.connections {
            writeln!(
                f,
                "Pole {} - Pole {}: {:.2} m, {}, {}",
                conn.from, conn.to, conn.distance, conn.fiber, conn.method
            )?;
        }

        if !self.costs.items.is_empty() {
            writeln!(f)?;
            let rows = cost_rows(self);
            let widths: Vec<usize> = (0..HEADERS.len())
                .map(|col| rows.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
                .collect();
            for row in &rows {
                let line = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:>width$}"))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(f, "{}", line.trim_end())?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Poles charged: {} ({:.2})",
            self.costs.poles_charged, self.costs.pole_cost
        )?;
        write!(f, "Total cost: ${:.2}", self.costs.total)
    }
}

/// Table of every fiber bracket with its diagram color and current prices
pub fn render_legend(table: &CostTable) -> String {
    Legend(table).to_string()
}

/// Printable bracket and installation price list
pub struct Legend<'a>(pub &'a CostTable);

impl fmt::Display for Legend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        writeln!(f, "Fiber types:")?;
        for bracket in FiberBracket::ALL {
            writeln!(
                f,
                "  {:<11} up to {:>5.0} m  {:<8} {:.2} $/m",
                bracket.label(),
                bracket.meters(),
                bracket.color(),
                table.fiber_rate(bracket)
            )?;
        }
        writeln!(f, "Installation:")?;
        for method in InstallationMethod::ALL {
            writeln!(
                f,
                "  {:<11} {:<6} line  {:.2} $/m",
                method.to_string(),
                method.line_style(),
                table.installation_rate(method)
            )?;
        }
        write!(f, "Pole fixture: {:.2} $", table.pole_price())
    }
}
