//! Block padding schemes
//!
//! ECB and CBC only accept whole blocks, and the high-level API pads for the
//! stream modes as well, so every plaintext goes through one of these
//! strategies first. Both schemes append `p = n - (len mod n)` bytes of value
//! `p`, so an aligned input always gains a full block and removal is never
//! ambiguous.
//!
//! The schemes differ only on removal:
//!
//! - [`Pkcs5`] trusts the final byte once it is in range.
//! - [`Pkcs7`] additionally checks every padding byte, in constant time.
//!
//! Neither ever panics on hostile input; malformed padding is reported as
//! [`Error::Padding`].

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};

use crate::error::{validate, Error, Result};
use params::utils::symmetric::PKCS_MAX_BLOCK_SIZE;

/// A reversible block padding strategy
pub trait PaddingScheme {
    /// Scheme name used in error messages
    fn name(&self) -> &'static str;

    /// Returns `data` followed by between 1 and `block_size` padding bytes
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Returns the prefix of `data` left after stripping the padding
    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]>;
}

/// PKCS#5 padding
///
/// Classic PKCS#5 is defined for 8-byte blocks only; here it is generalized
/// to any block size up to 255, which makes its output identical to PKCS#7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pkcs5;

/// PKCS#7 padding (RFC 5652 section 6.3)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pkcs7;

fn check_block_size(block_size: usize) -> Result<()> {
    validate::parameter(
        block_size > 0 && block_size <= PKCS_MAX_BLOCK_SIZE,
        "block_size",
        "block size must be between 1 and 255",
    )
}

fn append_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size)?;

    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    // pad_len <= 255 after the block size check
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Reads and bounds-checks the padding length byte
fn padding_length(scheme: &'static str, data: &[u8], block_size: usize) -> Result<usize> {
    check_block_size(block_size)?;

    let pad_len = match data.last() {
        Some(&b) => b as usize,
        None => return Err(Error::Padding { scheme, reason: "input is empty" }),
    };
    validate::padding(pad_len != 0, scheme, "padding length is zero")?;
    validate::padding(pad_len <= block_size, scheme, "padding length exceeds block size")?;
    validate::padding(pad_len <= data.len(), scheme, "padding length exceeds input length")?;
    Ok(pad_len)
}

impl PaddingScheme for Pkcs5 {
    fn name(&self) -> &'static str {
        "PKCS#5"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        append_padding(data, block_size)
    }

    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]> {
        let pad_len = padding_length(self.name(), data, block_size)?;
        Ok(&data[..data.len() - pad_len])
    }
}

impl PaddingScheme for Pkcs7 {
    fn name(&self) -> &'static str {
        "PKCS#7"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        append_padding(data, block_size)
    }

    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]> {
        let pad_len = padding_length(self.name(), data, block_size)?;
        let marker = pad_len as u8;

        let mut valid = Choice::from(1u8);
        for byte in &data[data.len() - pad_len..] {
            valid &= byte.ct_eq(&marker);
        }
        validate::padding(bool::from(valid), self.name(), "padding bytes are inconsistent")?;

        Ok(&data[..data.len() - pad_len])
    }
}

/// Padding strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Padding {
    /// Lenient removal, see [`Pkcs5`]
    Pkcs5,
    /// Strict removal, see [`Pkcs7`]
    Pkcs7,
}

impl Padding {
    /// All supported strategies
    pub const ALL: [Padding; 2] = [Padding::Pkcs5, Padding::Pkcs7];
}

impl PaddingScheme for Padding {
    fn name(&self) -> &'static str {
        match self {
            Padding::Pkcs5 => Pkcs5.name(),
            Padding::Pkcs7 => Pkcs7.name(),
        }
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        match self {
            Padding::Pkcs5 => Pkcs5.pad(data, block_size),
            Padding::Pkcs7 => Pkcs7.pad(data, block_size),
        }
    }

    fn unpad<'a>(&self, data: &'a [u8], block_size: usize) -> Result<&'a [u8]> {
        match self {
            Padding::Pkcs5 => Pkcs5.unpad(data, block_size),
            Padding::Pkcs7 => Pkcs7.unpad(data, block_size),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Pkcs5 => write!(f, "pkcs5"),
            Padding::Pkcs7 => write!(f, "pkcs7"),
        }
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('#', "").as_str() {
            "pkcs5" => Ok(Padding::Pkcs5),
            "pkcs7" => Ok(Padding::Pkcs7),
            other => Err(Error::param(
                "padding",
                format!("unknown padding scheme '{}'", other),
            )),
        }
    }
}

/// Pads with the PKCS#5 scheme
pub fn pkcs5_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    Pkcs5.pad(data, block_size)
}

/// Strips PKCS#5 padding
pub fn pkcs5_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    Pkcs5.unpad(data, block_size)
}

/// Pads with the PKCS#7 scheme
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    Pkcs7.pad(data, block_size)
}

/// Strips and verifies PKCS#7 padding
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    Pkcs7.unpad(data, block_size)
}
