//! Initialization vector for the 128-bit block modes

use core::fmt;
use core::ops::Deref;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::block::BLOCK_SIZE;
use crate::error::{validate, Result};

/// A 16-byte initialization vector
///
/// CBC, CFB and OFB use it as the initial chaining register. CTR uses it as
/// the initial counter block.
#[derive(Clone, Zeroize)]
pub struct Iv {
    data: [u8; BLOCK_SIZE],
}

impl Iv {
    /// Size of an IV in bytes
    pub const SIZE: usize = BLOCK_SIZE;

    /// Create a new IV from an existing array
    pub fn new(data: [u8; BLOCK_SIZE]) -> Self {
        Self { data }
    }

    /// Create an all-zero IV
    pub fn zeroed() -> Self {
        Self { data: [0u8; BLOCK_SIZE] }
    }

    /// Create from a slice, if it is exactly 16 bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("initialization vector", slice.len(), BLOCK_SIZE)?;

        let mut data = [0u8; BLOCK_SIZE];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Generate a random IV
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Generate a random IV, surfacing RNG failure instead of panicking
    pub fn try_random<R: RngCore + CryptoRng>(rng: &mut R) -> core::result::Result<Self, rand::Error> {
        let mut data = [0u8; BLOCK_SIZE];
        rng.try_fill_bytes(&mut data)?;
        Ok(Self { data })
    }

    /// Copy of the raw bytes
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        self.data
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for Iv {
    type Target = [u8; BLOCK_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<[u8; BLOCK_SIZE]> for Iv {
    fn from(data: [u8; BLOCK_SIZE]) -> Self {
        Self::new(data)
    }
}

impl TryFrom<&[u8]> for Iv {
    type Error = crate::error::Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl PartialEq for Iv {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl Eq for Iv {}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({:?})", &self.data[..])
    }
}
