//! SVG diagram of nodes and route edges.
//!
//! - [`Renderer`] — draws role-coloured nodes, styled route edges, grid and legend
//! - [`StylePalette`] — route line styles; more owners than slots is an error
//! - [`open_in_viewer`] — hands a written diagram to the platform viewer

mod canvas;
mod renderer;
mod style;

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

pub use renderer::{RenderOptions, Renderer};
pub use style::{LineStyle, NodeStyle, StylePalette};

/// Opens `path` with the system's default viewer.
///
/// The viewer process is spawned and left running.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    command.arg(path);
    debug!("Launching viewer: {:?}", command);

    command.spawn().map_err(|source| Error::Render {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
