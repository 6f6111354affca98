//! Route edges and the per-owner route plan read from a solver result.

use std::collections::HashMap;

use serde::Serialize;

use super::NodeId;

/// A directed edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((from, to): (NodeId, NodeId)) -> Self {
        Self::new(from, to)
    }
}

/// The ordered edges assigned to one route owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    owner: NodeId,
    edges: Vec<Edge>,
}

impl Route {
    /// Creates an empty route for the given owner.
    pub fn new(owner: NodeId) -> Self {
        Self {
            owner,
            edges: Vec::new(),
        }
    }

    /// Appends an edge to the end of this route.
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns the owner of this route.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Edges in the order they were read.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Routes keyed by owner, kept in first-seen owner order.
///
/// # Examples
///
/// ```
/// use crossdock_routes::models::{Edge, RoutePlan};
///
/// let mut plan = RoutePlan::new();
/// plan.push(7, Edge::new(1, 3));
/// plan.push(2, Edge::new(2, 3));
/// plan.push(7, Edge::new(3, 4));
/// assert_eq!(plan.owners(), vec![7, 2]);
/// assert_eq!(plan.route(7).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutePlan {
    routes: Vec<Route>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl RoutePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `edge` to the route of `owner`, opening the route on first sight.
    pub fn push(&mut self, owner: NodeId, edge: Edge) {
        let idx = match self.index.get(&owner) {
            Some(&idx) => idx,
            None => {
                self.routes.push(Route::new(owner));
                let idx = self.routes.len() - 1;
                self.index.insert(owner, idx);
                idx
            }
        };
        self.routes[idx].push_edge(edge);
    }

    /// Routes in first-seen owner order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the route of `owner`, if any edge was assigned to it.
    pub fn route(&self, owner: NodeId) -> Option<&Route> {
        self.index.get(&owner).map(|&i| &self.routes[i])
    }

    /// Owners in first-seen order.
    pub fn owners(&self) -> Vec<NodeId> {
        self.routes.iter().map(Route::owner).collect()
    }

    /// Number of distinct owners.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of edges across all routes.
    pub fn num_edges(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
