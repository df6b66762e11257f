//! Counter (CTR) mode with secure memory handling
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter block and XORing the result with the data.
//!
//! The IV is the initial counter block. By default all 16 bytes are treated
//! as one big-endian counter, matching NIST SP 800-38A. A narrower counter
//! occupies the low-order bytes of the block and wraps without carrying into
//! the bytes above it.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use common::security::barrier;

use super::super::{BlockCipher, BLOCK_SIZE};
use crate::error::{validate, Result};
use crate::types::Iv;

/// Counter mode implementation with secure memory handling
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    initial_block: [u8; BLOCK_SIZE],
    counter_block: [u8; BLOCK_SIZE],
    counter_size: usize,
    keystream: [u8; BLOCK_SIZE],
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a new CTR mode instance using the whole IV as the counter
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            initial_block: iv.to_bytes(),
            counter_block: iv.to_bytes(),
            counter_size: BLOCK_SIZE,
            keystream: [0u8; BLOCK_SIZE],
            keystream_pos: BLOCK_SIZE,
        }
    }

    /// Creates a new CTR mode instance with a counter of `counter_size` bytes
    ///
    /// The counter lives in the last `counter_size` bytes of the block; the
    /// remaining leading bytes of the IV act as a fixed nonce.
    pub fn with_counter_size(cipher: B, iv: &Iv, counter_size: usize) -> Result<Self> {
        validate::parameter(
            counter_size > 0 && counter_size <= BLOCK_SIZE,
            "counter_size",
            "Counter size must be between 1 and 16 bytes",
        )?;

        let mut ctr = Self::new(cipher, iv);
        ctr.counter_size = counter_size;
        Ok(ctr)
    }

    /// Size of the counter in bytes
    pub fn counter_size(&self) -> usize {
        self.counter_size
    }

    /// Generate the next keystream block and advance the counter
    fn generate_keystream(&mut self) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        self.keystream = self.counter_block;
        self.cipher.encrypt_block(&mut self.keystream)?;
        self.increment_counter();
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Increment the counter portion of the counter block, modulo 2^(8 * counter_size)
    fn increment_counter(&mut self) {
        let value = BigEndian::read_u128(&self.counter_block);
        let mask = if self.counter_size == BLOCK_SIZE {
            u128::MAX
        } else {
            (1u128 << (8 * self.counter_size)) - 1
        };
        let next = (value & !mask) | (value.wrapping_add(1) & mask);
        BigEndian::write_u128(&mut self.counter_block, next);
    }

    /// Process data in place (encrypt or decrypt)
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.keystream_pos >= BLOCK_SIZE {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Encrypts a message using CTR mode
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut ciphertext = plaintext.to_vec();
        self.process(&mut ciphertext)?;
        Ok(ciphertext)
    }

    /// Decrypts a message using CTR mode
    ///
    /// In CTR mode, encryption and decryption are the same operation
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Generate raw keystream into `output`
    ///
    /// Always starts from a fresh block boundary, discarding any buffered bytes.
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.keystream_pos = BLOCK_SIZE;
        self.process(output)
    }

    /// Seek to a block position relative to the initial counter
    ///
    /// After seeking, the next keystream block is E(IV + block_offset).
    pub fn seek(&mut self, block_offset: u64) {
        self.counter_block = self.initial_block;
        let value = BigEndian::read_u128(&self.counter_block);
        let mask = if self.counter_size == BLOCK_SIZE {
            u128::MAX
        } else {
            (1u128 << (8 * self.counter_size)) - 1
        };
        let next = (value & !mask) | (value.wrapping_add(u128::from(block_offset)) & mask);
        BigEndian::write_u128(&mut self.counter_block, next);

        self.keystream.zeroize();
        self.keystream_pos = BLOCK_SIZE;
    }

    /// Reset to the initial counter block, clearing buffered keystream
    pub fn reset(&mut self) {
        self.seek(0);
    }
}
