//! Error handling for the high-level cipher layer
//!
//! Re-exports the public error system and adds the conversion from the
//! primitives' narrower error type.

pub use symkit_api::error::{validate, Error, Result, ResultExt};

use symkit_algorithms::error::Error as PrimitiveError;

/// Convert a primitives error to the public error, relabelled with `context`
pub fn from_primitive_error(err: PrimitiveError, context: &'static str) -> Error {
    Error::from(err).with_context(context)
}

/// Convert an RNG failure to [`Error::EntropyUnavailable`]
pub fn from_rng_error(err: rand::Error, context: &'static str) -> Error {
    Error::EntropyUnavailable {
        context,
        message: err.to_string(),
    }
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with a primitives error to a Result with the public error
    fn map_primitive_err(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, context: &'static str) -> Result<T> {
        self.map_err(|e| from_primitive_error(e, context))
    }
}
