//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Every key size AES accepts, in ascending order
pub const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// IV size for the chaining modes (one cipher block)
pub const AES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Largest block size PKCS#5/PKCS#7 padding can describe in one byte
pub const PKCS_MAX_BLOCK_SIZE: usize = 255;

/// Size of the expanded AES-128 key schedule (11 round keys)
pub const AES128_ROUND_KEYS_SIZE: usize = 176;

/// Size of the expanded AES-192 key schedule (13 round keys)
pub const AES192_ROUND_KEYS_SIZE: usize = 208;

/// Size of the expanded AES-256 key schedule (15 round keys)
pub const AES256_ROUND_KEYS_SIZE: usize = 240;
