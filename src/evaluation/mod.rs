//! Route cost aggregation.

mod aggregator;

pub use aggregator::{CostReport, RouteAggregator, RouteCost};
