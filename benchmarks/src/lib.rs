//! Benchmark utilities for logistic-rs.
//!
//! - Synthetic, linearly separable datasets
//! - Timing helpers

pub mod data;
pub mod utils;

pub use data::{two_blobs, Blobs};
pub use utils::{time_fn, Timer};
