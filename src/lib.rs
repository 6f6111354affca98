//! # crossdock-routes
//!
//! Diagnostics for cross-dock routing solutions: reads a problem instance and
//! a solver's route file, computes the total route cost and renders a 2D
//! diagram of nodes and route edges.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (NodeId, Position, Instance, RoutePlan)
//! - [`input`] — Instance table and result file readers
//! - [`distance`] — Pairwise cost table
//! - [`evaluation`] — Per-route and total cost aggregation
//! - [`render`] — SVG diagram renderer
//!
//! [`run`] executes the whole pipeline for a [`Config`]:
//! read instance → build costs → read result → aggregate → render.

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod models;
pub mod render;

use tracing::{debug, info};

pub use config::Config;
pub use error::{Error, Result};

use distance::CostTable;
use evaluation::{CostReport, RouteAggregator};
use input::{read_result_file, InstanceReader};
use render::Renderer;

/// Runs the full pipeline and returns the cost report.
///
/// The diagram is written to `config.output_path`. Any failure aborts the run
/// before rendering.
pub fn run(config: &Config) -> Result<CostReport> {
    info!(
        "Instance {}, result {}",
        config.instance_path.display(),
        config.result_path.display()
    );

    let instance = InstanceReader::new()
        .skip_rows(config.skip_rows)
        .read_file(&config.instance_path)?;

    let costs = CostTable::from_positions(instance.positions());
    debug!("Cost table over {} nodes", costs.size());

    let plan = read_result_file(&config.result_path)?;
    let report = RouteAggregator::new(&costs).aggregate(&plan)?;

    Renderer::default().render_to_file(&config.output_path, &instance, &report)?;
    if config.open {
        render::open_in_viewer(&config.output_path)?;
    }

    Ok(report)
}
