//! Route diagram renderer.

use std::fs;
use std::path::Path;

use tracing::{debug, info, trace, warn};

use super::canvas::{tick_label, Frame, Svg};
use super::style::{LineStyle, NodeStyle, StylePalette};
use crate::error::{Error, Result};
use crate::evaluation::CostReport;
use crate::models::{Edge, Instance, NodeId, NodeRole, Position};

/// Canvas size, node size and route styles.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub node_radius: f64,
    pub palette: StylePalette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            node_radius: 14.0,
            palette: StylePalette::default(),
        }
    }
}

const MARGIN: f64 = 60.0;
const LEGEND_ROW: f64 = 24.0;

/// Draws an instance and its route costs as an SVG diagram.
///
/// # Examples
///
/// ```
/// use crossdock_routes::distance::CostTable;
/// use crossdock_routes::evaluation::RouteAggregator;
/// use crossdock_routes::input::read_instance;
/// use crossdock_routes::models::{Edge, RoutePlan};
/// use crossdock_routes::render::Renderer;
///
/// let instance = read_instance("1,1\n1,0,0\n2,3,4\n3,2,1\n".as_bytes(), "inline").unwrap();
/// let costs = CostTable::from_positions(instance.positions());
/// let mut plan = RoutePlan::new();
/// plan.push(1, Edge::new(1, 3));
/// plan.push(1, Edge::new(3, 2));
/// let report = RouteAggregator::new(&costs).aggregate(&plan).unwrap();
///
/// let svg = Renderer::default().render(&instance, &report).unwrap();
/// assert!(svg.contains("Cross-dock"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders the diagram and returns the SVG document.
    ///
    /// Fails with [`Error::RenderCapacity`] before drawing anything if the
    /// report has more route owners than the palette has styles.
    pub fn render(&self, instance: &Instance, report: &CostReport) -> Result<String> {
        let styles = self.options.palette.assign(report.num_routes())?;
        let positions = instance.positions();

        let mut nodes: Vec<(NodeId, NodeRole, Position)> = Vec::new();
        for id in instance.nodes() {
            // nodes() only yields ids that have a role
            let Some(role) = instance.role_of(id) else {
                continue;
            };
            match positions.get(id) {
                Some(p) => nodes.push((id, role, *p)),
                None => warn!("{} {} has no position and is not drawn", role, id),
            }
        }

        let mut route_segments: Vec<(usize, Position, Position)> = Vec::new();
        for (slot, route) in report.routes().iter().enumerate() {
            for edge in &route.edges {
                let from = lookup(positions.get(edge.from), route.owner, edge, edge.from)?;
                let to = lookup(positions.get(edge.to), route.owner, edge, edge.to)?;
                route_segments.push((slot, from, to));
            }
        }

        let width = f64::from(self.options.width);
        let height = f64::from(self.options.height);
        let frame = Frame::fit(
            nodes
                .iter()
                .map(|(_, _, p)| p)
                .chain(route_segments.iter().flat_map(|(_, a, b)| [a, b])),
            width,
            height,
            MARGIN,
        );

        let mut svg = Svg::new(width, height);
        self.draw_markers(&mut svg, styles);
        self.draw_grid(&mut svg, &frame);
        for &(slot, from, to) in &route_segments {
            self.draw_edge(&mut svg, &frame, slot, &styles[slot], &from, &to);
        }
        for (id, role, p) in &nodes {
            self.draw_node(&mut svg, &frame, *id, *role, p);
        }
        self.draw_legend(&mut svg, &frame, &nodes, report, styles);
        svg.text(
            (width / 2.0, MARGIN / 2.0),
            &format!("Total cost = {}", report.total()),
            r#"font-size="20" text-anchor="middle""#,
        );

        debug!(
            "Rendered {} nodes and {} edges",
            nodes.len(),
            route_segments.len()
        );
        Ok(svg.finish())
    }

    /// Renders the diagram and writes it to `path`.
    pub fn render_to_file(
        &self,
        path: impl AsRef<Path>,
        instance: &Instance,
        report: &CostReport,
    ) -> Result<()> {
        let path = path.as_ref();
        let svg = self.render(instance, report)?;
        fs::write(path, svg).map_err(|source| Error::Render {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote diagram to {}", path.display());
        Ok(())
    }

    fn draw_markers(&self, svg: &mut Svg, styles: &[LineStyle]) {
        svg.raw("<defs>");
        for (slot, style) in styles.iter().enumerate() {
            svg.raw(&format!(
                r#"<marker id="arrow-{}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{}" fill-opacity="{}"/></marker>"#,
                slot, style.color, style.opacity
            ));
        }
        svg.raw("</defs>");
    }

    fn draw_grid(&self, svg: &mut Svg, frame: &Frame) {
        let (left, top, right, bottom) = frame.area();
        for x in frame.x_ticks() {
            let px = frame.map_x(x);
            svg.line((px, top), (px, bottom), r##"stroke="#dddddd" stroke-width="1""##);
            svg.text(
                (px, bottom + 18.0),
                &tick_label(x),
                r#"font-size="12" text-anchor="middle""#,
            );
        }
        for y in frame.y_ticks() {
            let py = frame.map_y(y);
            svg.line((left, py), (right, py), r##"stroke="#dddddd" stroke-width="1""##);
            svg.text(
                (left - 6.0, py + 4.0),
                &tick_label(y),
                r#"font-size="12" text-anchor="end""#,
            );
        }
        svg.rect(
            (left, top),
            right - left,
            bottom - top,
            r#"fill="none" stroke="black" stroke-width="1""#,
        );
    }

    fn draw_edge(
        &self,
        svg: &mut Svg,
        frame: &Frame,
        slot: usize,
        style: &LineStyle,
        from: &Position,
        to: &Position,
    ) {
        let (x1, y1) = frame.map(from);
        let (x2, y2) = frame.map(to);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            trace!("Skipping zero-length edge at {}", from);
            return;
        }

        // stop at the node rims so the arrow head stays visible
        let r = self.options.node_radius;
        let (start, end) = if len > 2.0 * r {
            let (ux, uy) = (dx / len, dy / len);
            ((x1 + ux * r, y1 + uy * r), (x2 - ux * r, y2 - uy * r))
        } else {
            ((x1, y1), (x2, y2))
        };

        svg.line(start, end, &line_attrs(style, Some(slot)));
    }

    fn draw_node(&self, svg: &mut Svg, frame: &Frame, id: NodeId, role: NodeRole, p: &Position) {
        let style = NodeStyle::for_role(role);
        let center = frame.map(p);
        svg.circle(
            center,
            self.options.node_radius,
            &format!(r#"fill="{}" fill-opacity="{}""#, style.fill, style.opacity),
        );
        svg.text(
            (center.0, center.1 + 6.0),
            &id.to_string(),
            r#"font-size="16" text-anchor="middle""#,
        );
    }

    fn draw_legend(
        &self,
        svg: &mut Svg,
        frame: &Frame,
        nodes: &[(NodeId, NodeRole, Position)],
        report: &CostReport,
        styles: &[LineStyle],
    ) {
        let roles: Vec<NodeRole> = [NodeRole::Supplier, NodeRole::Consumer, NodeRole::CrossDock]
            .into_iter()
            .filter(|role| nodes.iter().any(|(_, r, _)| r == role))
            .collect();
        let rows = roles.len() + report.num_routes();
        if rows == 0 {
            return;
        }

        let (_, top, right, _) = frame.area();
        let box_w = 150.0;
        let box_h = rows as f64 * LEGEND_ROW + 8.0;
        let x = right - box_w - 8.0;
        let mut y = top + 8.0;
        svg.rect(
            (x, y),
            box_w,
            box_h,
            r##"fill="white" fill-opacity="0.85" stroke="#999999""##,
        );

        y += LEGEND_ROW / 2.0 + 4.0;
        for role in roles {
            let style = NodeStyle::for_role(role);
            svg.circle(
                (x + 18.0, y),
                7.0,
                &format!(r#"fill="{}" fill-opacity="{}""#, style.fill, style.opacity),
            );
            svg.text((x + 34.0, y + 5.0), role.label(), r#"font-size="14""#);
            y += LEGEND_ROW;
        }
        for (route, style) in report.routes().iter().zip(styles) {
            svg.line((x + 6.0, y), (x + 30.0, y), &line_attrs(style, None));
            svg.text(
                (x + 34.0, y + 5.0),
                &format!("Route {}", route.owner),
                r#"font-size="14""#,
            );
            y += LEGEND_ROW;
        }
    }
}

fn line_attrs(style: &LineStyle, arrow: Option<usize>) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}" stroke-opacity="{}""#,
        style.color, style.width, style.opacity
    );
    if let Some(dash) = style.dash {
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
    }
    if let Some(slot) = arrow {
        attrs.push_str(&format!(r#" marker-end="url(#arrow-{})""#, slot));
    }
    attrs
}

fn lookup(position: Option<&Position>, owner: NodeId, edge: &Edge, node: NodeId) -> Result<Position> {
    position.copied().ok_or(Error::Lookup {
        owner,
        from: edge.from,
        to: edge.to,
        node,
    })
}
