//! Node and route line styles.

use crate::error::{Error, Result};
use crate::models::NodeRole;

/// Stroke style for one route owner's edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    /// SVG `stroke-dasharray`, `None` for a solid line.
    pub dash: Option<&'static str>,
    pub width: f64,
    pub opacity: f64,
}

impl LineStyle {
    pub const SOLID: LineStyle = LineStyle {
        color: "black",
        dash: None,
        width: 2.0,
        opacity: 0.6,
    };

    pub const DASHED: LineStyle = LineStyle {
        color: "black",
        dash: Some("8,5"),
        width: 2.0,
        opacity: 0.6,
    };
}

/// Fill style for a node role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub opacity: f64,
}

impl NodeStyle {
    /// Style for the given role: suppliers red, consumers green, cross-dock
    /// translucent blue.
    pub fn for_role(role: NodeRole) -> Self {
        match role {
            NodeRole::Supplier => NodeStyle {
                fill: "red",
                opacity: 1.0,
            },
            NodeRole::Consumer => NodeStyle {
                fill: "green",
                opacity: 1.0,
            },
            NodeRole::CrossDock => NodeStyle {
                fill: "blue",
                opacity: 0.7,
            },
        }
    }
}

/// Ordered set of route line styles. Route `i` is drawn with slot `i`.
///
/// # Examples
///
/// ```
/// use crossdock_routes::render::{LineStyle, StylePalette};
///
/// let palette = StylePalette::default();
/// assert_eq!(palette.slots(), 2);
/// assert_eq!(palette.assign(2).unwrap()[1], LineStyle::DASHED);
/// assert!(palette.assign(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StylePalette {
    styles: Vec<LineStyle>,
}

impl StylePalette {
    pub fn new(styles: Vec<LineStyle>) -> Self {
        Self { styles }
    }

    /// Number of distinct route styles.
    pub fn slots(&self) -> usize {
        self.styles.len()
    }

    /// Returns the styles for `routes` owners, in owner order.
    ///
    /// Fails with [`Error::RenderCapacity`] if there are more owners than slots.
    pub fn assign(&self, routes: usize) -> Result<&[LineStyle]> {
        if routes > self.styles.len() {
            return Err(Error::RenderCapacity {
                owners: routes,
                slots: self.styles.len(),
            });
        }
        Ok(&self.styles[..routes])
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::new(vec![LineStyle::SOLID, LineStyle::DASHED])
    }
}
