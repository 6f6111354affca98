//! Run configuration passed through the pipeline.

use std::path::PathBuf;

/// Default instance table, relative to the working directory.
pub const DEFAULT_INSTANCE_PATH: &str = "data/data1.csv";

/// Default diagram output path.
pub const DEFAULT_OUTPUT_PATH: &str = "routes.svg";

/// Everything a single run needs.
///
/// # Examples
///
/// ```
/// use crossdock_routes::Config;
///
/// let config = Config::new("result.txt", None::<&str>).with_skip_rows(1);
/// assert_eq!(config.instance_path.to_str(), Some("data/data1.csv"));
/// assert_eq!(config.skip_rows, 1);
/// assert!(!config.open);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub instance_path: PathBuf,
    pub result_path: PathBuf,
    pub output_path: PathBuf,
    /// Rows between the instance header and the first node row to skip.
    pub skip_rows: usize,
    /// Open the diagram in the system viewer after writing it.
    pub open: bool,
}

impl Config {
    /// Creates a configuration, falling back to [`DEFAULT_INSTANCE_PATH`]
    /// when no instance is given.
    pub fn new(result_path: impl Into<PathBuf>, instance_path: Option<impl Into<PathBuf>>) -> Self {
        Self {
            instance_path: instance_path
                .map(Into::into)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTANCE_PATH)),
            result_path: result_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            skip_rows: 0,
            open: false,
        }
    }

    /// Sets the diagram output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the number of preamble rows after the instance header.
    pub fn with_skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    /// Opens the diagram after writing it.
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new("out.txt", None::<PathBuf>);
        assert_eq!(c.result_path, PathBuf::from("out.txt"));
        assert_eq!(c.instance_path, PathBuf::from(DEFAULT_INSTANCE_PATH));
        assert_eq!(c.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(c.skip_rows, 0);
        assert!(!c.open);
    }

    #[test]
    fn test_builder() {
        let c = Config::new("out.txt", Some("inst.csv"))
            .with_output("diagram.svg")
            .with_skip_rows(2)
            .with_open(true);
        assert_eq!(c.instance_path, PathBuf::from("inst.csv"));
        assert_eq!(c.output_path, PathBuf::from("diagram.svg"));
        assert_eq!(c.skip_rows, 2);
        assert!(c.open);
    }
}
