//! Security primitives and memory safety utilities
//!
//! Foundational types for handling key schedules, keystream and other
//! material that must not outlive the operation that produced it.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecretVec};

// Re-export memory safety traits and utilities
pub use memory::{barrier, SecureCompare};
