//! Reader for comma-separated instance tables.
//!
//! Row 0 holds `nSuppliers,nConsumers`. Every following row holds
//! `nodeId,x,y`. Blank lines are skipped and cells beyond the third are
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::models::{Instance, NodeId, Position, Positions};

const HEADER_FORMAT: &str = "header row `nSuppliers,nConsumers`";
const ROW_FORMAT: &str = "node row `nodeId,x,y`";

/// Configurable instance table reader.
///
/// # Examples
///
/// ```
/// use crossdock_routes::input::InstanceReader;
///
/// let table = "1,1\n1,0,0\n2,3,4\n3,5,5\n";
/// let instance = InstanceReader::new().read(table.as_bytes(), "inline").unwrap();
/// assert_eq!(instance.cross_dock(), 3);
/// assert_eq!(instance.positions().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceReader {
    skip_rows: usize,
}

impl InstanceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips `n` non-blank rows between the header and the first node row.
    pub fn skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    /// Reads an instance from a file on disk.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Instance> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read(BufReader::new(file), &path.display().to_string())
    }

    /// Reads an instance from any buffered reader.
    ///
    /// `source` names the input in error messages.
    pub fn read<R: BufRead>(&self, reader: R, source: &str) -> Result<Instance> {
        let mut header: Option<(NodeId, NodeId)> = None;
        let mut skipped = 0;
        let mut positions = Positions::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| {
                let expected = if header.is_none() {
                    HEADER_FORMAT
                } else {
                    ROW_FORMAT
                };
                Error::from_read(e, source, line_no, expected)
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();

            if header.is_none() {
                header = Some(parse_header(&cells, source, line_no)?);
                continue;
            }
            if skipped < self.skip_rows {
                skipped += 1;
                trace!("Skipping row {}: {}", line_no, line);
                continue;
            }

            let (id, position) = parse_row(&cells, source, line_no)?;
            trace!("{} {} {}", id, position.x, position.y);
            if let Some(previous) = positions.insert(id, position) {
                warn!(
                    "{}:{}: node {} listed again, {} replaces {}",
                    source, line_no, id, position, previous
                );
            }
        }

        let (n_suppliers, n_consumers) = header
            .ok_or_else(|| Error::parse(source, 1, "instance table is empty", HEADER_FORMAT))?;
        let instance = Instance::new(n_suppliers, n_consumers, positions).ok_or_else(|| {
            Error::parse(
                source,
                1,
                format!("{} suppliers and {} consumers overflow node ids", n_suppliers, n_consumers),
                HEADER_FORMAT,
            )
        })?;

        info!(
            "Read instance {}: {} suppliers, {} consumers, cross-dock {}, {} positions",
            source,
            n_suppliers,
            n_consumers,
            instance.cross_dock(),
            instance.positions().len()
        );
        debug!("Nodes: {:?}", instance.nodes());
        Ok(instance)
    }
}

/// Reads an instance file with the default reader settings.
pub fn read_instance_file(path: impl AsRef<Path>) -> Result<Instance> {
    InstanceReader::new().read_file(path)
}

/// Reads an instance from a buffered reader with the default settings.
pub fn read_instance<R: BufRead>(reader: R, source: &str) -> Result<Instance> {
    InstanceReader::new().read(reader, source)
}

fn parse_header(cells: &[&str], source: &str, line: usize) -> Result<(NodeId, NodeId)> {
    let mut cells = cells.to_vec();
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    if cells.len() != 2 {
        return Err(Error::parse(
            source,
            line,
            format!("found {} fields", cells.len()),
            HEADER_FORMAT,
        ));
    }
    let n_suppliers = parse_cell(cells[0], 1, source, line, HEADER_FORMAT)?;
    let n_consumers = parse_cell(cells[1], 2, source, line, HEADER_FORMAT)?;
    Ok((n_suppliers, n_consumers))
}

fn parse_row(cells: &[&str], source: &str, line: usize) -> Result<(NodeId, Position)> {
    if cells.len() < 3 {
        return Err(Error::parse(
            source,
            line,
            format!("found {} fields", cells.len()),
            ROW_FORMAT,
        ));
    }
    let id = parse_cell(cells[0], 1, source, line, ROW_FORMAT)?;
    let x = parse_cell(cells[1], 2, source, line, ROW_FORMAT)?;
    let y = parse_cell(cells[2], 3, source, line, ROW_FORMAT)?;
    Ok((id, Position::new(x, y)))
}

fn parse_cell<T: FromStr>(
    cell: &str,
    column: usize,
    source: &str,
    line: usize,
    expected: &'static str,
) -> Result<T> {
    cell.parse().map_err(|_| {
        Error::parse(
            source,
            line,
            format!("`{}` in column {} is not an integer", cell, column),
            expected,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(table: &str) -> Result<Instance> {
        read_instance(table.as_bytes(), "test.csv")
    }

    fn assert_parse_error(result: Result<Instance>, expected_line: usize) {
        match result {
            Err(Error::Parse { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_scenario() {
        let inst = read("1,1\n1,0,0\n2,3,4\n").expect("valid");
        assert_eq!(inst.suppliers(), 1..2);
        assert_eq!(inst.consumers(), 2..3);
        assert_eq!(inst.cross_dock(), 3);
        assert_eq!(inst.positions().get(2), Some(&Position::new(3, 4)));
        assert!(!inst.positions().contains(3));
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let inst = read("\n 2 , 1 \n\n1, -5, 7\n2,0,0\r\n3,1,1\n4,2,2\n\n").expect("valid");
        assert_eq!(inst.cross_dock(), 4);
        assert_eq!(inst.positions().get(1), Some(&Position::new(-5, 7)));
        assert_eq!(inst.positions().len(), 4);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let inst = read("1,0,,\n1,2,3,99,foo\n").expect("valid");
        assert_eq!(inst.positions().get(1), Some(&Position::new(2, 3)));
    }

    #[test]
    fn test_header_wrong_count() {
        assert_parse_error(read("1,2,3\n1,0,0\n"), 1);
        assert_parse_error(read("4\n1,0,0\n"), 1);
    }

    #[test]
    fn test_header_not_integer() {
        assert_parse_error(read("a,2\n"), 1);
        assert_parse_error(read("-1,2\n"), 1);
    }

    #[test]
    fn test_row_too_short() {
        assert_parse_error(read("1,1\n1,0,0\n2,3\n"), 3);
    }

    #[test]
    fn test_row_not_integer() {
        assert_parse_error(read("1,1\n1,0,0\n2,3.5,4\n"), 3);
        assert_parse_error(read("1,1\n\nx,0,0\n"), 3);
    }

    #[test]
    fn test_empty_table() {
        assert_parse_error(read(""), 1);
        assert_parse_error(read("\n\n"), 1);
    }

    #[test]
    fn test_header_only() {
        let inst = read("0,0\n").expect("valid");
        assert_eq!(inst.cross_dock(), 1);
        assert!(inst.positions().is_empty());
    }

    #[test]
    fn test_duplicate_row_overwrites() {
        let inst = read("1,0\n1,0,0\n1,5,5\n").expect("valid");
        assert_eq!(inst.positions().get(1), Some(&Position::new(5, 5)));
    }

    #[test]
    fn test_skip_rows() {
        let table = "1,1\n100,200\n1,0,0\n2,3,4\n";
        let inst = InstanceReader::new()
            .skip_rows(1)
            .read(table.as_bytes(), "test.csv")
            .expect("valid");
        assert_eq!(inst.positions().len(), 2);
        assert!(!inst.positions().contains(100));

        assert_parse_error(read(table), 2);
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"1,1\n1,0,0\n\xff\xfe,3,4\n";
        assert_parse_error(read_instance(bytes, "test.csv"), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = read_instance_file("/nonexistent/instance.csv").expect_err("missing");
        assert!(matches!(err, Error::Io { .. }));
    }
}
