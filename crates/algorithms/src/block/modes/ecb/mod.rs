//! Electronic Codebook (ECB) mode
//!
//! Every block is encrypted independently under the same key. Identical
//! plaintext blocks therefore produce identical ciphertext blocks, which
//! leaks structure. ECB is available for interoperability only.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, BLOCK_SIZE};
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance around `cipher`
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message using ECB mode
    ///
    /// The plaintext must be a multiple of the block size.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB plaintext", plaintext.len(), BLOCK_SIZE)?;

        let mut ciphertext = plaintext.to_vec();
        for block in ciphertext.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message using ECB mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB ciphertext", ciphertext.len(), BLOCK_SIZE)?;

        let mut plaintext = ciphertext.to_vec();
        for block in plaintext.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(plaintext)
    }
}
