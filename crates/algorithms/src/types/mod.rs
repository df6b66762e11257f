//! Type-safe wrappers for cipher inputs
//!
//! Raw byte slices are accepted at the edges; inside the crate fixed-size
//! values travel as dedicated types so a 12-byte nonce can never be handed
//! to a mode that chains 16-byte blocks.

pub mod iv;

// Re-export main types
pub use iv::Iv;

// Re-export security types from symkit-common
pub use common::security::{SecretBuffer, SecretVec};
