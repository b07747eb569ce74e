//! Console exercises - two small teaching programs
//!
//! This library backs the `fibonacci` and `sort` binaries. All of the logic
//! lives here so it can be unit tested against in-memory readers and writers.

pub mod common;
pub mod fib;
pub mod sort;

// Re-export commonly used types for tests
pub use common::{Error, Result};
