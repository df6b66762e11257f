//! Error handling for cryptographic primitives

use core::fmt;
use std::borrow::Cow;

use symkit_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key of a size the cipher does not support
    KeyLength {
        /// Cipher that rejected the key
        algorithm: &'static str,
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Padding could not be validated or removed
    Padding {
        /// Padding scheme that rejected the buffer
        scheme: &'static str,
        /// What was wrong with the padding
        reason: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::KeyLength { algorithm, actual } => {
                write!(f, "Invalid key length for {}: {} bytes", algorithm, actual)
            }
            Error::Padding { scheme, reason } => {
                write!(f, "{} padding corrupted: {}", scheme, reason)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "primitive parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::KeyLength { algorithm, actual } => CoreError::InvalidKeyLength {
                context: algorithm,
                actual,
            },
            Error::Padding { scheme, reason } => CoreError::PaddingCorrupted {
                context: scheme,
                message: reason.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
