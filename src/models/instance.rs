//! Cross-dock problem instance.

use std::ops::Range;

use super::{NodeId, NodeRole, Positions};

/// A cross-dock routing instance: node roles plus node positions.
///
/// Ids are contiguous. Suppliers occupy `1..=n_suppliers`, consumers follow,
/// and the cross-dock is the next id after the last consumer.
///
/// # Examples
///
/// ```
/// use crossdock_routes::models::{Instance, NodeRole, Positions};
///
/// let inst = Instance::new(2, 3, Positions::new()).unwrap();
/// assert_eq!(inst.suppliers(), 1..3);
/// assert_eq!(inst.consumers(), 3..6);
/// assert_eq!(inst.cross_dock(), 6);
/// assert_eq!(inst.role_of(4), Some(NodeRole::Consumer));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    suppliers: Range<NodeId>,
    consumers: Range<NodeId>,
    cross_dock: NodeId,
    positions: Positions,
}

impl Instance {
    /// Creates an instance from the supplier and consumer counts.
    ///
    /// Returns `None` if the resulting ids do not fit in [`NodeId`].
    pub fn new(n_suppliers: NodeId, n_consumers: NodeId, positions: Positions) -> Option<Self> {
        let consumers_start = n_suppliers.checked_add(1)?;
        let cross_dock = consumers_start.checked_add(n_consumers)?;
        Some(Self {
            suppliers: 1..consumers_start,
            consumers: consumers_start..cross_dock,
            cross_dock,
            positions,
        })
    }

    /// Supplier ids.
    pub fn suppliers(&self) -> Range<NodeId> {
        self.suppliers.clone()
    }

    /// Consumer ids.
    pub fn consumers(&self) -> Range<NodeId> {
        self.consumers.clone()
    }

    /// The cross-dock id.
    pub fn cross_dock(&self) -> NodeId {
        self.cross_dock
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Role of `id`, or `None` if it belongs to no role.
    pub fn role_of(&self, id: NodeId) -> Option<NodeRole> {
        if self.suppliers.contains(&id) {
            Some(NodeRole::Supplier)
        } else if self.consumers.contains(&id) {
            Some(NodeRole::Consumer)
        } else if id == self.cross_dock {
            Some(NodeRole::CrossDock)
        } else {
            None
        }
    }

    /// All role ids: suppliers, then consumers, then the cross-dock.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.suppliers
            .clone()
            .chain(self.consumers.clone())
            .chain(std::iter::once(self.cross_dock))
            .collect()
    }

    /// Role ids that have no position row.
    pub fn unpositioned(&self) -> Vec<NodeId> {
        self.nodes()
            .into_iter()
            .filter(|&id| !self.positions.contains(id))
            .collect()
    }
}
