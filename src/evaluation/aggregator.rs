//! Route aggregator that sums edge costs per owner and overall.

use serde::Serialize;
use tracing::{debug, info};

use crate::distance::CostTable;
use crate::error::{Error, Result};
use crate::models::{Edge, NodeId, Route, RoutePlan};

/// Cost of one owner's route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCost {
    /// Route owner.
    pub owner: NodeId,
    /// Edges in the order they were read.
    pub edges: Vec<Edge>,
    /// Sum of edge costs.
    pub cost: f64,
}

/// Per-owner route costs plus the overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    routes: Vec<RouteCost>,
    total: f64,
}

impl CostReport {
    /// Route costs in first-seen owner order.
    pub fn routes(&self) -> &[RouteCost] {
        &self.routes
    }

    /// Sum of all route costs.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// All edges of all routes, route by route.
    pub fn flattened_edges(&self) -> Vec<Edge> {
        self.routes
            .iter()
            .flat_map(|r| r.edges.iter().copied())
            .collect()
    }

    /// Re-sums the cost of every flattened edge against `costs`.
    ///
    /// Returns `None` if an edge has no cost entry.
    pub fn recompute_total(&self, costs: &CostTable) -> Option<f64> {
        self.flattened_edges()
            .iter()
            .map(|e| costs.cost(e.from, e.to))
            .sum()
    }
}

/// Sums the costs of route edges against a [`CostTable`].
///
/// # Examples
///
/// ```
/// use crossdock_routes::models::{Edge, Position, Positions, RoutePlan};
/// use crossdock_routes::distance::CostTable;
/// use crossdock_routes::evaluation::RouteAggregator;
///
/// let positions: Positions = vec![(1, Position::new(0, 0)), (2, Position::new(3, 4))]
///     .into_iter()
///     .collect();
/// let costs = CostTable::from_positions(&positions);
///
/// let mut plan = RoutePlan::new();
/// plan.push(1, Edge::new(1, 2));
///
/// let report = RouteAggregator::new(&costs).aggregate(&plan).unwrap();
/// assert!((report.total() - 5.0).abs() < 1e-10);
/// ```
pub struct RouteAggregator<'a> {
    costs: &'a CostTable,
}

impl<'a> RouteAggregator<'a> {
    /// Creates an aggregator over the given cost table.
    pub fn new(costs: &'a CostTable) -> Self {
        Self { costs }
    }

    /// Computes the cost of a single route.
    pub fn route_cost(&self, route: &Route) -> Result<f64> {
        let mut cost = 0.0;
        for edge in route.edges() {
            cost += self.edge_cost(route.owner(), edge)?;
        }
        Ok(cost)
    }

    /// Computes every route's cost and the total.
    pub fn aggregate(&self, plan: &RoutePlan) -> Result<CostReport> {
        let mut routes = Vec::with_capacity(plan.num_routes());
        let mut total = 0.0;

        for route in plan.routes() {
            let cost = self.route_cost(route)?;
            debug!("Route {} costs {}", route.owner(), cost);
            total += cost;
            routes.push(RouteCost {
                owner: route.owner(),
                edges: route.edges().to_vec(),
                cost,
            });
        }

        info!("Total cost = {}", total);
        Ok(CostReport { routes, total })
    }

    fn edge_cost(&self, owner: NodeId, edge: &Edge) -> Result<f64> {
        self.costs.cost(edge.from, edge.to).ok_or_else(|| {
            let node = if self.costs.contains(edge.from) {
                edge.to
            } else {
                edge.from
            };
            Error::Lookup {
                owner,
                from: edge.from,
                to: edge.to,
                node,
            }
        })
    }
}
