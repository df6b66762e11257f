//! Error type definitions for symmetric cipher operations

use thiserror::Error as ThisError;

/// Primary error type for symkit operations
///
/// Every variant carries a static `context` naming the operation that failed.
/// Key material, IVs and plaintext are never embedded in an error.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key (or requested key length) is not 16, 24 or 32 bytes
    #[error("{context}: invalid key length {actual} (expected 16, 24 or 32 bytes)")]
    InvalidKeyLength {
        context: &'static str,
        actual: usize,
    },

    /// The secure random source failed to produce bytes
    #[error("{context}: entropy unavailable: {message}")]
    EntropyUnavailable {
        context: &'static str,
        message: String,
    },

    /// Padding could not be removed from a decrypted buffer
    ///
    /// With unauthenticated modes this is also what a wrong key, IV or
    /// padding scheme usually looks like to the caller.
    #[error("{context}: padding corrupted: {message}")]
    PaddingCorrupted {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for symkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { actual, .. } => Self::InvalidKeyLength { context, actual },
            Self::EntropyUnavailable { message, .. } => Self::EntropyUnavailable { context, message },
            Self::PaddingCorrupted { message, .. } => Self::PaddingCorrupted { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Length-style variants have no message and are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::EntropyUnavailable { context, .. } => Self::EntropyUnavailable { context, message },
            Self::PaddingCorrupted { context, .. } => Self::PaddingCorrupted { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other @ (Self::InvalidKeyLength { .. } | Self::InvalidLength { .. }) => other,
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKeyLength { context, .. }
            | Self::EntropyUnavailable { context, .. }
            | Self::PaddingCorrupted { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_details() {
        let err = Error::InvalidLength {
            context: "IV",
            expected: 16,
            actual: 8,
        }
        .with_context("CBC encrypt");

        assert_eq!(
            err,
            Error::InvalidLength {
                context: "CBC encrypt",
                expected: 16,
                actual: 8,
            }
        );
    }

    #[test]
    fn test_with_message_skips_length_variants() {
        let err = Error::InvalidKeyLength {
            context: "AES key",
            actual: 7,
        };
        assert_eq!(err.clone().with_message("ignored"), err);

        let err = Error::PaddingCorrupted {
            context: "PKCS#7",
            message: String::new(),
        }
        .with_message("pad byte out of range");
        assert_eq!(err.to_string(), "PKCS#7: padding corrupted: pad byte out of range");
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidKeyLength {
            context: "generate_key",
            actual: 129,
        };
        assert_eq!(
            err.to_string(),
            "generate_key: invalid key length 129 (expected 16, 24 or 32 bytes)"
        );
        assert_eq!(err.context(), "generate_key");
    }
}
