//! Public API types for the symkit library
//!
//! This crate owns the error taxonomy shared by every symkit crate. Lower
//! layers convert their own errors into [`Error`] before they cross a public
//! boundary.

#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
