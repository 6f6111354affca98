//! Domain model types for cross-dock route diagnostics.
//!
//! Provides node identifiers and roles, integer positions, the problem
//! instance that partitions nodes into suppliers, consumers and a single
//! cross-dock, and the per-owner route plan read from a solver result.

mod instance;
mod node;
mod route;

pub use instance::Instance;
pub use node::{NodeId, NodeRole, Position, Positions};
pub use route::{Edge, Route, RoutePlan};
