//! Common implementations and shared functionality for the symkit library
//!
//! This crate provides the secret-holding buffers and memory-ordering helpers
//! used by the cipher and key layers.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};

// Re-export comparison trait and memory barrier utilities
pub use security::memory::{barrier, SecureCompare};
