//! High-level AES block-mode encryption for the symkit library
//!
//! This crate wraps the primitives in `symkit-algorithms` into one-call
//! functions: build the cipher from a raw key, pad, run the chosen mode, and
//! unpad on the way back. It also owns key and IV generation.
//!
//! ```
//! use symkit_symmetric::{decrypt_cbc, encrypt_cbc, generate_iv, generate_key, Padding};
//!
//! # fn main() -> symkit_symmetric::Result<()> {
//! let key = generate_key(32)?;
//! let iv = generate_iv()?;
//!
//! let ciphertext = encrypt_cbc(b"attack at dawn", key.as_bytes(), iv.as_ref(), Padding::Pkcs7)?;
//! assert_eq!(ciphertext.len() % 16, 0);
//!
//! let plaintext = decrypt_cbc(&ciphertext, key.as_bytes(), iv.as_ref(), Padding::Pkcs7)?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! None of these modes authenticate. A wrong key, IV or padding choice
//! surfaces as garbage plaintext or [`Error::PaddingCorrupted`], never as an
//! integrity failure.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod error;
pub mod keys;

// Re-export main types for convenience
pub use cipher::{
    decrypt, decrypt_cbc, decrypt_cfb, decrypt_ctr, decrypt_ecb, decrypt_ofb, encrypt,
    encrypt_cbc, encrypt_cfb, encrypt_ctr, encrypt_ecb, encrypt_ofb,
};
pub use config::{BlockModeCipher, CipherConfig, Mode};
pub use keys::{
    generate_iv, generate_iv_with_rng, generate_key, generate_key_with_rng, AesKey, KeySize,
};

// Padding strategies and the IV type come straight from the primitives layer
pub use symkit_algorithms::padding::{
    pkcs5_pad, pkcs5_unpad, pkcs7_pad, pkcs7_unpad, Padding, PaddingScheme, Pkcs5, Pkcs7,
};
pub use symkit_algorithms::Iv;

// Re-export the API error system instead of custom error types
pub use symkit_api::error::{validate, Error, Result, ResultExt};
