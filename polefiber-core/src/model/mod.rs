//! Data model for pole chains
//!
//! Contains the coordinate and pole types, the closed set of fiber brackets
//! and the installation methods a connection can use.

pub mod fiber;
pub mod installation;
pub mod pole;

pub use fiber::FiberBracket;
pub use installation::InstallationMethod;
pub use pole::{Connection, Coordinate, Pole, PoleId};
