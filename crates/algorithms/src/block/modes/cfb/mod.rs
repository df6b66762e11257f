//! Cipher Feedback (CFB) mode
//!
//! Full-block CFB-128: the keystream for each block is the encryption of the
//! previous ciphertext block, starting from the IV. Streaming is supported,
//! so calls may be split at any byte boundary.

use zeroize::{Zeroize, ZeroizeOnDrop};

use common::security::barrier;

use super::super::{BlockCipher, BLOCK_SIZE};
use crate::error::Result;
use crate::types::Iv;

/// CFB-128 mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    iv: [u8; BLOCK_SIZE],
    register: [u8; BLOCK_SIZE],
    keystream: [u8; BLOCK_SIZE],
    pos: usize,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.to_bytes(),
            register: iv.to_bytes(),
            keystream: [0u8; BLOCK_SIZE],
            pos: BLOCK_SIZE,
        }
    }

    fn refill(&mut self) -> Result<()> {
        self.keystream = self.register;
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.pos = 0;
        Ok(())
    }

    /// Encrypts `data` in place
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.pos == BLOCK_SIZE {
                self.refill()?;
            }
            *byte ^= self.keystream[self.pos];
            // Feed back the ciphertext byte
            self.register[self.pos] = *byte;
            self.pos += 1;
        }

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Decrypts `data` in place
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.pos == BLOCK_SIZE {
                self.refill()?;
            }
            let c = *byte;
            *byte ^= self.keystream[self.pos];
            self.register[self.pos] = c;
            self.pos += 1;
        }

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Encrypts a message using CFB mode
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.encrypt_in_place(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message using CFB mode
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place(&mut plaintext)?;
        Ok(plaintext)
    }

    /// Reset to the initial IV, clearing buffered keystream
    pub fn reset(&mut self) {
        self.register = self.iv;
        self.keystream.zeroize();
        self.pos = BLOCK_SIZE;
    }
}
