//! Linear pole chains built from ordered point markers

mod builder;
mod graph;

pub use builder::{InstallationPlan, PoleChain, build_chain};
pub use graph::PoleGraph;
