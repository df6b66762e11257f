//! Block cipher primitives for symkit
//!
//! This crate provides the AES block cipher, the five classic modes of
//! operation built on top of it, and the PKCS#5/PKCS#7 padding schemes.
//!
//! # Layers
//!
//! - [`block::aes`]: single-block AES-128/192/256 with a constant-time,
//!   table-free S-box. The key schedule lives in zeroizing buffers.
//! - [`block::modes`]: ECB and CBC over block-aligned buffers; CTR, CFB and
//!   OFB as stateful keystream generators over buffers of any length.
//! - [`padding`]: padding strategies selected through the closed
//!   [`Padding`] enum.
//!
//! None of the modes authenticate their output. Decrypting with the wrong
//! key, IV or padding returns garbage or a padding error, never an
//! integrity failure.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher and mode implementations
pub mod block;
pub use block::{Aes, Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm};
pub use block::modes::{Cbc, Cfb, Ctr, Ecb, Ofb};

// Padding schemes
pub mod padding;
pub use padding::{Padding, PaddingScheme, Pkcs5, Pkcs7};

// Type system
pub mod types;
pub use types::Iv;
