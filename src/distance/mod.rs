//! Pairwise travel costs.
//!
//! Provides a dense cost table over all positioned nodes of an instance.

mod matrix;

pub use matrix::{euclidean, CostTable};
