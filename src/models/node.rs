//! Node identifiers, roles and positions.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

/// Integer node identifier as used in instance and result files.
pub type NodeId = u32;

/// The role a node plays in a cross-dock instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeRole {
    /// Source node.
    Supplier,
    /// Destination node.
    Consumer,
    /// The single transshipment node.
    CrossDock,
}

impl NodeRole {
    /// Label used in logs and the diagram legend.
    pub fn label(&self) -> &'static str {
        match self {
            NodeRole::Supplier => "Supplier",
            NodeRole::Consumer => "Consumer",
            NodeRole::CrossDock => "Cross-dock",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An integer coordinate pair.
///
/// # Examples
///
/// ```
/// use crossdock_routes::models::Position;
///
/// let a = Position::new(0, 0);
/// let b = Position::new(3, 4);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        // i64 differences can overflow at extreme coordinates
        let dx = (i128::from(self.x) - i128::from(other.x)) as f64;
        let dy = (i128::from(self.y) - i128::from(other.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Positions of all nodes listed in an instance, iterated in ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions(BTreeMap<NodeId, Position>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position of `id`, returning the previous one if any.
    pub fn insert(&mut self, id: NodeId, position: Position) -> Option<Position> {
        self.0.insert(id, position)
    }

    pub fn get(&self, id: NodeId) -> Option<&Position> {
        self.0.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Node ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, Position> {
        self.0.iter()
    }
}

impl FromIterator<(NodeId, Position)> for Positions {
    fn from_iter<I: IntoIterator<Item = (NodeId, Position)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Positions {
    type Item = (&'a NodeId, &'a Position);
    type IntoIter = btree_map::Iter<'a, NodeId, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
