//! Common utilities shared by both exercise programs

pub mod error;
pub mod input;
pub mod logging;

pub use error::{Error, Result};
