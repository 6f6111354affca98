//! Dense pairwise cost table keyed by node id.

use std::collections::HashMap;

use crate::models::{NodeId, Position, Positions};

/// Euclidean distance between two positions.
///
/// This is the per-pair function behind [`CostTable`]; calling it directly
/// gives the same values on demand.
pub fn euclidean(a: &Position, b: &Position) -> f64 {
    a.distance_to(b)
}

/// A dense n×n cost table over every positioned node, stored in row-major
/// order.
///
/// Built eagerly in O(n²) time and memory. Instances are expected to hold
/// tens of nodes.
///
/// # Examples
///
/// ```
/// use crossdock_routes::models::{Position, Positions};
/// use crossdock_routes::distance::CostTable;
///
/// let positions: Positions = vec![
///     (1, Position::new(0, 0)),
///     (2, Position::new(3, 4)),
///     (5, Position::new(6, 8)),
/// ]
/// .into_iter()
/// .collect();
/// let costs = CostTable::from_positions(&positions);
/// assert!((costs.cost(1, 2).unwrap() - 5.0).abs() < 1e-10);
/// assert_eq!(costs.cost(5, 5), Some(0.0));
/// assert_eq!(costs.cost(1, 3), None);
/// assert_eq!(costs.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CostTable {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    data: Vec<f64>,
}

impl CostTable {
    /// Computes the Euclidean cost of every ordered pair in `positions`.
    pub fn from_positions(positions: &Positions) -> Self {
        let ids: Vec<NodeId> = positions.ids().collect();
        let coords: Vec<&Position> = positions.iter().map(|(_, p)| p).collect();
        let n = ids.len();
        let index = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(coords[i], coords[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { ids, index, data }
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// Returns `None` if either node has no position.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let i = *self.index.get(&from)?;
        let j = *self.index.get(&to)?;
        Some(self.data[i * self.ids.len() + j])
    }

    /// Returns `true` if `id` has an entry in this table.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of nodes in this table.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Node ids covered by this table, ascending.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Returns `true` if the table is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.ids.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.data[i * n + j] - self.data[j * n + i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
