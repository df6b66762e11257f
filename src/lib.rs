//! # symkit
//!
//! AES with the classic chaining modes, PKCS#5/PKCS#7 padding and key/IV
//! generation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! symkit = "0.3"
//! ```
//!
//! ```
//! use symkit::prelude::*;
//!
//! # fn main() -> symkit::Result<()> {
//! let key = generate_key(16)?;
//! let iv = generate_iv()?;
//!
//! let ct = encrypt(Mode::Ctr, b"hello", key.as_bytes(), Some(iv.as_ref()), Padding::Pkcs7)?;
//! let pt = decrypt(Mode::Ctr, &ct, key.as_bytes(), Some(iv.as_ref()), Padding::Pkcs7)?;
//! assert_eq!(pt, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `symmetric` (default): the high-level per-mode API, key and IV generation
//! - `algorithms`: the AES core, low-level modes and padding schemes only
//! - `serde`: `Serialize`/`Deserialize` on `Mode`, `Padding` and `CipherConfig`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `symkit-api`: public error type and validation helpers
//! - `symkit-common`: secret-holding buffers and memory barriers
//! - `symkit-params`: key, block and IV size constants
//! - `symkit-algorithms`: AES, low-level modes, padding
//! - `symkit-symmetric`: one-call encrypt/decrypt, keys, configuration

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use symkit_api as api;
pub use symkit_common as common;
pub use symkit_params as params;

pub use symkit_api::{Error, Result};

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use symkit_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use symkit_symmetric as symmetric;

/// Common imports for symkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec, SecureCompare};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        Aes, BlockCipher, Cbc, Cfb, Ctr, Ecb, Iv, Ofb, Padding, PaddingScheme, Pkcs5, Pkcs7,
    };

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        decrypt, decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb, decrypt_ofb, encrypt,
        encrypt_cbc, encrypt_cfb, encrypt_ctr, encrypt_ecb, encrypt_ofb, generate_iv,
        generate_key, AesKey, BlockModeCipher, CipherConfig, KeySize, Mode,
    };
}
