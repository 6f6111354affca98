//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;

use crate::models::NodeId;

/// Possible errors.
///
/// All of them are fatal: the pipeline stops at the first one. Each variant
/// maps to its own process exit code via [`Error::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row or line does not match its expected format.
    #[error("{file}:{line}: {message} (expected {expected})")]
    Parse {
        /// File (or source name) being parsed.
        file: String,
        /// 1-based line number.
        line: usize,
        message: String,
        /// Human readable description of the accepted format.
        expected: &'static str,
    },

    /// A route edge references a node with no known position.
    #[error("route {owner}: edge ({from}, {to}) references node {node} which has no position")]
    Lookup {
        owner: NodeId,
        from: NodeId,
        to: NodeId,
        node: NodeId,
    },

    /// A required command line argument was not given.
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),

    /// More route owners than the renderer has line styles for.
    #[error("{owners} route owners found but only {slots} line styles are available")]
    RenderCapacity { owners: usize, slots: usize },

    /// The diagram could not be written or shown.
    #[error("failed to render diagram to {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cost report could not be written to standard output.
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    /// Process exit code for this error kind.
    ///
    /// Codes follow the BSD `sysexits.h` numbering where one fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgument(_) => 64,
            Error::Parse { .. } => 65,
            Error::Io { .. } => 66,
            Error::Lookup { .. } => 67,
            Error::RenderCapacity { .. } => 68,
            Error::Render { .. } => 73,
            Error::Output(_) => 74,
        }
    }

    /// Wraps a failed line read. Invalid UTF-8 is a malformed line, not an
    /// unreadable file.
    pub(crate) fn from_read(
        source: std::io::Error,
        file: &str,
        line: usize,
        expected: &'static str,
    ) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Error::parse(file, line, "line is not valid UTF-8", expected)
        } else {
            Error::Io {
                path: file.into(),
                source,
            }
        }
    }

    pub(crate) fn parse(
        file: &str,
        line: usize,
        message: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Error::Parse {
            file: file.to_string(),
            line,
            message: message.into(),
            expected,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
