//! Human- and tool-readable renderings of a planned chain
//!
//! - plain text listing with a cost table
//! - Graphviz DOT diagram with a legend
//! - annotated `GeoJSON` for map viewers

mod dot;
mod text;
mod to_geojson;

pub use dot::{DotDiagram, render_dot};
pub use text::{Legend, render_legend, render_text};
