//! Reader for whitespace-separated solver result files.
//!
//! Each edge line is `owner from to`. Lines with zero or one token carry no
//! edge (a blank line or a bare objective value) and are skipped. Any other
//! line that is not exactly three integers is rejected, so a labelled line
//! such as `TotalObjective 42` fails instead of being silently dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::models::{Edge, NodeId, RoutePlan};

const EDGE_FORMAT: &str = "edge line `owner from to` of three integers";

/// Reads a result file from disk.
pub fn read_result_file(path: impl AsRef<Path>) -> Result<RoutePlan> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_result(BufReader::new(file), &path.display().to_string())
}

/// Reads a route plan from any buffered reader.
///
/// `source` names the input in error messages.
///
/// # Examples
///
/// ```
/// use crossdock_routes::input::read_result;
///
/// let text = "1 1 3\n1 3 4\n2 2 3\n\n17.5\n";
/// let plan = read_result(text.as_bytes(), "inline").unwrap();
/// assert_eq!(plan.owners(), vec![1, 2]);
/// assert_eq!(plan.num_edges(), 3);
/// ```
pub fn read_result<R: BufRead>(reader: R, source: &str) -> Result<RoutePlan> {
    let mut plan = RoutePlan::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| Error::from_read(e, source, line_no, EDGE_FORMAT))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= 1 {
            if !tokens.is_empty() {
                trace!("Skipping non-edge line {}: {}", line_no, line);
            }
            continue;
        }
        if tokens.len() != 3 {
            return Err(Error::parse(
                source,
                line_no,
                format!("found {} tokens", tokens.len()),
                EDGE_FORMAT,
            ));
        }

        let owner = parse_token(tokens[0], source, line_no)?;
        let from = parse_token(tokens[1], source, line_no)?;
        let to = parse_token(tokens[2], source, line_no)?;
        plan.push(owner, Edge::new(from, to));
    }

    info!(
        "Read result {}: {} routes, {} edges",
        source,
        plan.num_routes(),
        plan.num_edges()
    );
    for route in plan.routes() {
        debug!(
            "Route {}: {:?}",
            route.owner(),
            route
                .edges()
                .iter()
                .map(|e| (e.from, e.to))
                .collect::<Vec<_>>()
        );
    }
    Ok(plan)
}

fn parse_token(token: &str, source: &str, line: usize) -> Result<NodeId> {
    token.parse().map_err(|_| {
        Error::parse(
            source,
            line,
            format!("`{}` is not a node id", token),
            EDGE_FORMAT,
        )
    })
}
