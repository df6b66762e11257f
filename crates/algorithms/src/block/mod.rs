//! Block cipher implementations and modes of operation
//!
//! ## Example usage
//!
//! ```
//! use symkit_algorithms::block::{Aes, BlockCipher};
//! use symkit_algorithms::block::modes::Cbc;
//! use symkit_algorithms::types::Iv;
//!
//! let key = [0x2bu8; 16];
//! let iv = Iv::new([0u8; 16]);
//!
//! let cbc = Cbc::new(Aes::new(&key).unwrap(), &iv);
//! let plaintext = b"exactly thirty-two bytes long!!!";
//! let ciphertext = cbc.encrypt(plaintext).unwrap();
//! let decrypted = cbc.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use zeroize::Zeroize;

use crate::error::{validate, Result};

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes, Aes128, Aes192, Aes256};
pub use modes::{Cbc, Cfb, Ctr, Ecb, Ofb};

/// Block size shared by every cipher in this crate (128-bit blocks)
pub const BLOCK_SIZE: usize = params::utils::symmetric::AES_BLOCK_SIZE;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A keyed single-block transform over 128-bit blocks
///
/// Implementations never pad. Every call operates on exactly one block and
/// reports any other length as [`crate::Error::Length`].
pub trait BlockCipher: Sized + Zeroize {
    /// Creates a new block cipher instance from raw key bytes
    ///
    /// Fails with [`crate::Error::KeyLength`] if the cipher does not accept
    /// keys of this length.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Encrypts `src` into `dst`; both must be exactly one block
    fn encrypt_block_to(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        validate::length("block source", src.len(), BLOCK_SIZE)?;
        validate::length("block destination", dst.len(), BLOCK_SIZE)?;
        dst.copy_from_slice(src);
        self.encrypt_block(dst)
    }

    /// Decrypts `src` into `dst`; both must be exactly one block
    fn decrypt_block_to(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        validate::length("block source", src.len(), BLOCK_SIZE)?;
        validate::length("block destination", dst.len(), BLOCK_SIZE)?;
        dst.copy_from_slice(src);
        self.decrypt_block(dst)
    }

    /// Returns the key size in bytes of this instance
    fn key_size(&self) -> usize;

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;

    /// Returns the block size in bytes
    fn block_size() -> usize {
        BLOCK_SIZE
    }
}
