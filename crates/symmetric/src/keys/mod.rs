//! AES key type and key/IV generation
//!
//! Keys and IVs come from the operating system CSPRNG by default. The
//! `_with_rng` variants take any cryptographically secure generator, which is
//! how the tests get deterministic output. A failing generator is reported as
//! [`Error::EntropyUnavailable`]; nothing retries.

use core::fmt;

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use symkit_algorithms::Iv;
use symkit_common::{barrier, SecretVec, SecureCompare};
use symkit_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

use crate::error::{from_rng_error, Error, Result};

const KEY_STRING_PREFIX: &str = "SYMKIT-AES";
const KEY_STRING_SUFFIX: &str = "-KEY:";

/// The three AES key lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key
    Aes128,
    /// 24-byte key
    Aes192,
    /// 32-byte key
    Aes256,
}

impl KeySize {
    /// All key sizes, smallest first
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Map a byte length to a key size
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Aes128),
            AES192_KEY_SIZE => Ok(KeySize::Aes192),
            AES256_KEY_SIZE => Ok(KeySize::Aes256),
            actual => Err(Error::InvalidKeyLength {
                context: "AES key",
                actual,
            }),
        }
    }

    /// Key length in bytes
    pub fn len(self) -> usize {
        match self {
            KeySize::Aes128 => AES128_KEY_SIZE,
            KeySize::Aes192 => AES192_KEY_SIZE,
            KeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in bits
    pub fn bits(self) -> usize {
        self.len() * 8
    }
}

/// An owned AES key of 16, 24 or 32 bytes
///
/// The bytes are zeroized on drop, never printed by `Debug`, and compared in
/// constant time.
#[derive(Clone)]
pub struct AesKey {
    bytes: SecretVec,
    size: KeySize,
}

impl AesKey {
    /// Creates a key from raw bytes, rejecting any length other than 16, 24 or 32
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())?;
        Ok(Self {
            bytes: SecretVec::from_slice(bytes),
            size,
        })
    }

    /// Creates a new random key from the OS CSPRNG
    pub fn generate(size: KeySize) -> Result<Self> {
        generate_key(size.len())
    }

    /// Returns the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Key size
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.size.len()
    }

    /// Always false; an `AesKey` holds at least 16 bytes
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Serializes the key as `SYMKIT-AES<bits>-KEY:<base64>`
    pub fn to_secure_string(&self) -> String {
        let key_b64 = Zeroizing::new(base64::encode(self.as_bytes()));
        format!("{}{}{}{}", KEY_STRING_PREFIX, self.size.bits(), KEY_STRING_SUFFIX, *key_b64)
    }

    /// Loads a key from the format written by [`AesKey::to_secure_string`]
    ///
    /// The bit count in the tag must agree with the decoded key length.
    pub fn from_secure_string(serialized: &str) -> Result<Self> {
        let malformed = |message: &str| Error::InvalidParameter {
            context: "AES key string",
            message: message.to_string(),
        };

        let rest = serialized
            .strip_prefix(KEY_STRING_PREFIX)
            .ok_or_else(|| malformed("missing SYMKIT-AES prefix"))?;
        let (bits, b64_part) = rest
            .split_once(KEY_STRING_SUFFIX)
            .ok_or_else(|| malformed("missing -KEY: separator"))?;
        let bits: usize = bits.parse().map_err(|_| malformed("key size is not a number"))?;

        let key_bytes = Zeroizing::new(
            base64::decode(b64_part).map_err(|_| malformed("key is not valid base64"))?,
        );
        let key = Self::new(&key_bytes)?;
        if key.size.bits() != bits {
            return Err(malformed("tagged key size does not match key length"));
        }
        Ok(key)
    }
}

impl AsRef<[u8]> for AesKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for AesKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().secure_eq(other.as_bytes())
    }
}

impl Eq for AesKey {}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey<{}>([REDACTED])", self.size.bits())
    }
}

/// Generates a random key of `len` bytes from the OS CSPRNG
///
/// Only 16, 24 and 32 are accepted; anything else is
/// [`Error::InvalidKeyLength`].
pub fn generate_key(len: usize) -> Result<AesKey> {
    generate_key_with_rng(&mut OsRng, len)
}

/// Generates a random key of `len` bytes from `rng`
pub fn generate_key_with_rng<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<AesKey> {
    let size = KeySize::from_len(len).map_err(|e| e.with_context("generate_key"))?;

    let mut bytes = SecretVec::zeroed(size.len());
    barrier::with_barriers(|| rng.try_fill_bytes(bytes.as_mut_slice()))
        .map_err(|e| from_rng_error(e, "generate_key"))?;

    debug!("generated {}-bit AES key", size.bits());
    Ok(AesKey { bytes, size })
}

/// Generates a random 16-byte IV from the OS CSPRNG
pub fn generate_iv() -> Result<Iv> {
    generate_iv_with_rng(&mut OsRng)
}

/// Generates a random 16-byte IV from `rng`
pub fn generate_iv_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Iv> {
    let iv = Iv::try_random(rng).map_err(|e| from_rng_error(e, "generate_iv"))?;
    debug!("generated {}-byte IV", iv.len());
    Ok(iv)
}
