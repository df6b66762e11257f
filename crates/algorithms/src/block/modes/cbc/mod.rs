//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption. The first block is XORed with the initialization vector.
//!
//! Follows NIST SP 800-38A. Input must already be block aligned; padding is
//! the caller's job.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, BLOCK_SIZE};
use super::xor_in_place;
use crate::error::{validate, Result};
use crate::types::Iv;

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: [u8; BLOCK_SIZE],
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.to_bytes(),
        }
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("CBC plaintext", plaintext.len(), BLOCK_SIZE)?;

        let mut ciphertext = plaintext.to_vec();
        let mut prev_block = self.iv;

        for block in ciphertext.chunks_exact_mut(BLOCK_SIZE) {
            // XOR with previous ciphertext block (or IV for the first block)
            xor_in_place(block, &prev_block);
            self.cipher.encrypt_block(block)?;
            prev_block.copy_from_slice(block);
        }

        prev_block.zeroize();
        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("CBC ciphertext", ciphertext.len(), BLOCK_SIZE)?;

        let mut plaintext = ciphertext.to_vec();
        let mut prev_block = self.iv;
        let mut saved = [0u8; BLOCK_SIZE];

        for block in plaintext.chunks_exact_mut(BLOCK_SIZE) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &prev_block);
            prev_block = saved;
        }

        prev_block.zeroize();
        saved.zeroize();
        Ok(plaintext)
    }
}
