//! Output Feedback (OFB) mode
//!
//! The keystream is produced by repeatedly encrypting the IV; it does not
//! depend on the data. Encryption and decryption are the same operation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use common::security::barrier;

use super::super::{BlockCipher, BLOCK_SIZE};
use crate::error::Result;
use crate::types::Iv;

/// OFB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    iv: [u8; BLOCK_SIZE],
    register: [u8; BLOCK_SIZE],
    pos: usize,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.to_bytes(),
            register: iv.to_bytes(),
            pos: BLOCK_SIZE,
        }
    }

    /// Process data in place (encrypt or decrypt)
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.pos == BLOCK_SIZE {
                // The register doubles as the current keystream block
                self.cipher.encrypt_block(&mut self.register)?;
                self.pos = 0;
            }
            *byte ^= self.register[self.pos];
            self.pos += 1;
        }

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Encrypts a message using OFB mode
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.process(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message using OFB mode
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Reset to the initial IV
    pub fn reset(&mut self) {
        self.register = self.iv;
        self.pos = BLOCK_SIZE;
    }
}
