//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Computing the S-box from the field inverse instead of table lookups
//! - Validating keys before use to prevent silent failure
//!
//! The expanded key schedule is kept in a [`SecretBuffer`] and wiped when the
//! cipher is dropped.

use core::sync::atomic::{compiler_fence, Ordering};

use common::security::SecretBuffer;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUND_KEYS_SIZE, AES192_KEY_SIZE, AES192_ROUND_KEYS_SIZE,
    AES256_KEY_SIZE, AES256_ROUND_KEYS_SIZE, AES_BLOCK_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000,
    0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    // always do the full exponentiation, even for x==0
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // 0 has no inverse; the S-box maps it to 0 before the affine step
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo affine then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    // A⁻¹ is convolution by t¹ + t³ + t⁶ mod (t⁸+1)
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// Expands `key` into `round_keys`, whose length fixes the number of rounds
///
/// Works for all three key sizes: `Nk = key.len() / 4` words of key feed
/// `round_keys.len() / 4` words of schedule.
fn expand_key_into(key: &[u8], round_keys: &mut [u8]) {
    let nk = key.len() / 4;
    let total_words = round_keys.len() / 4;

    round_keys[..key.len()].copy_from_slice(key);

    for i in nk..total_words {
        let prev = &round_keys[(i - 1) * 4..i * 4];
        let mut temp = u32::from_be_bytes([prev[0], prev[1], prev[2], prev[3]]);
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }

        let back = &round_keys[(i - nk) * 4..(i - nk + 1) * 4];
        let word = u32::from_be_bytes([back[0], back[1], back[2], back[3]]) ^ temp;
        round_keys[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
}

/// SubBytes step
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    // ensure no reordering around our bit-ops
    compiler_fence(Ordering::SeqCst);
}

/// Inverse SubBytes
fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// ShiftRows step (state is column-major: byte `4c + r` is row r, column c)
fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[c * 4 + r] = t[((c + r) % 4) * 4 + r];
        }
    }
}

/// Inverse ShiftRows
fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[((c + r) % 4) * 4 + r] = t[c * 4 + r];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn mul9(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ b
}

#[inline(always)]
fn mul11(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(b) ^ b
}

#[inline(always)]
fn mul13(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ b
}

#[inline(always)]
fn mul14(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ mul2(b)
}

/// MixColumns step
fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        col[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        col[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        col[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

/// Inverse MixColumns
fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        col[1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        col[2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        col[3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

/// AddRoundKey step
#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Runs the full cipher over one block with an expanded schedule
fn encrypt_with_schedule(block: &mut [u8], round_keys: &[u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Runs the inverse cipher over one block with an expanded schedule
fn decrypt_with_schedule(block: &mut [u8], round_keys: &[u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[rounds * 16..]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// AES-128 block cipher
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<AES128_ROUND_KEYS_SIZE>, // 11 rounds × 16 bytes
}

/// AES-192 block cipher
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: SecretBuffer<AES192_ROUND_KEYS_SIZE>, // 13 rounds × 16 bytes
}

/// AES-256 block cipher
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<AES256_ROUND_KEYS_SIZE>, // 15 rounds × 16 bytes
}

impl CipherAlgorithm for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl CipherAlgorithm for Aes192 {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

impl CipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl BlockCipher for Aes128 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(<Self as CipherAlgorithm>::name(), key.len(), AES128_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key_into(key, round_keys.as_mut_slice());
        Ok(Aes128 { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn key_size(&self) -> usize {
        AES128_KEY_SIZE
    }

    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }
}

impl BlockCipher for Aes192 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(<Self as CipherAlgorithm>::name(), key.len(), AES192_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key_into(key, round_keys.as_mut_slice());
        Ok(Aes192 { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn key_size(&self) -> usize {
        AES192_KEY_SIZE
    }

    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }
}

impl BlockCipher for Aes256 {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(<Self as CipherAlgorithm>::name(), key.len(), AES256_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key_into(key, round_keys.as_mut_slice());
        Ok(Aes256 { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_with_schedule(block, self.round_keys.as_slice())
    }

    fn key_size(&self) -> usize {
        AES256_KEY_SIZE
    }

    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }
}

/// AES with the variant chosen from the key length at runtime
///
/// This is the entry point when the key size is only known from the data:
/// 16, 24 and 32 byte keys select AES-128, AES-192 and AES-256. Any other
/// length fails with [`Error::KeyLength`].
#[derive(Clone, Debug, Zeroize)]
pub enum Aes {
    /// 128-bit key variant
    Aes128(Aes128),
    /// 192-bit key variant
    Aes192(Aes192),
    /// 256-bit key variant
    Aes256(Aes256),
}

impl BlockCipher for Aes {
    fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            AES128_KEY_SIZE => Aes128::new(key).map(Aes::Aes128),
            AES192_KEY_SIZE => Aes192::new(key).map(Aes::Aes192),
            AES256_KEY_SIZE => Aes256::new(key).map(Aes::Aes256),
            actual => Err(Error::KeyLength {
                algorithm: "AES",
                actual,
            }),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            Aes::Aes128(c) => c.encrypt_block(block),
            Aes::Aes192(c) => c.encrypt_block(block),
            Aes::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            Aes::Aes128(c) => c.decrypt_block(block),
            Aes::Aes192(c) => c.decrypt_block(block),
            Aes::Aes256(c) => c.decrypt_block(block),
        }
    }

    fn key_size(&self) -> usize {
        match self {
            Aes::Aes128(c) => c.key_size(),
            Aes::Aes192(c) => c.key_size(),
            Aes::Aes256(c) => c.key_size(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Aes::Aes128(c) => BlockCipher::name(c),
            Aes::Aes192(c) => BlockCipher::name(c),
            Aes::Aes256(c) => BlockCipher::name(c),
        }
    }
}
