//! Readers for the two input files.
//!
//! - [`InstanceReader`] — comma-separated instance table (counts and node positions)
//! - [`read_result_file`] — whitespace-separated solver result (owner/edge lines)
//!
//! Each reader opens its file, reads it fully and closes it before returning.

mod instance;
mod result;

pub use instance::{read_instance, read_instance_file, InstanceReader};
pub use result::{read_result, read_result_file};
