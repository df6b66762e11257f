//! Error handling for the symkit ecosystem

pub mod types;
pub mod traits;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Specialized result types for different operations
pub type CipherResult<T> = Result<T>;
pub type KeyResult<T> = Result<T>;
