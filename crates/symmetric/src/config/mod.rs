//! Runtime cipher selection
//!
//! [`Mode`] and [`CipherConfig`] name a mode and padding pair as plain data,
//! parseable from strings such as `"cbc"` / `"pkcs7"` and serializable with
//! the `serde` feature. [`BlockModeCipher`] binds a configuration to a key.

use core::fmt;
use core::str::FromStr;

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use symkit_algorithms::{Iv, Padding};

use crate::cipher;
use crate::error::{Error, Result};
use crate::keys::{generate_iv_with_rng, AesKey};

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Counter
    Ctr,
    /// Cipher Feedback (128-bit segments)
    Cfb,
    /// Output Feedback
    Ofb,
}

impl Mode {
    /// All supported modes
    pub const ALL: [Mode; 5] = [Mode::Ecb, Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb];

    /// Whether the mode needs an IV
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Ctr => "ctr",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            "ctr" => Ok(Mode::Ctr),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            other => Err(Error::InvalidParameter {
                context: "mode",
                message: format!("unknown block mode '{}'", other),
            }),
        }
    }
}

/// A mode and padding pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CipherConfig {
    /// Mode of operation
    pub mode: Mode,
    /// Padding applied before encryption
    pub padding: Padding,
}

impl CipherConfig {
    /// Creates a configuration
    pub fn new(mode: Mode, padding: Padding) -> Self {
        Self { mode, padding }
    }
}

impl fmt::Display for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mode, self.padding)
    }
}

impl FromStr for CipherConfig {
    type Err = Error;

    /// Parses `"<mode>/<padding>"`, e.g. `"cbc/pkcs7"`
    fn from_str(s: &str) -> Result<Self> {
        let (mode, padding) = s.split_once('/').ok_or_else(|| Error::InvalidParameter {
            context: "cipher config",
            message: format!("expected '<mode>/<padding>', got '{}'", s),
        })?;
        let padding = padding.parse::<Padding>().map_err(|e| Error::from(e).with_context("cipher config"))?;
        Ok(Self::new(mode.parse()?, padding))
    }
}

/// A key bound to a mode and padding choice
///
/// Reusable across messages; each call still builds a fresh cipher instance.
#[derive(Debug, Clone)]
pub struct BlockModeCipher {
    config: CipherConfig,
    key: AesKey,
}

impl BlockModeCipher {
    /// Binds `key` to `config`
    pub fn new(config: CipherConfig, key: AesKey) -> Self {
        Self { config, key }
    }

    /// The bound configuration
    pub fn config(&self) -> CipherConfig {
        self.config
    }

    /// The bound key
    pub fn key(&self) -> &AesKey {
        &self.key
    }

    /// Encrypts with the bound mode; `iv` is required unless the mode is ECB
    pub fn encrypt(&self, plaintext: &[u8], iv: Option<&Iv>) -> Result<Vec<u8>> {
        cipher::encrypt(
            self.config.mode,
            plaintext,
            self.key.as_bytes(),
            iv.map(|iv| iv.as_ref()),
            self.config.padding,
        )
    }

    /// Decrypts with the bound mode; `iv` is required unless the mode is ECB
    pub fn decrypt(&self, ciphertext: &[u8], iv: Option<&Iv>) -> Result<Vec<u8>> {
        cipher::decrypt(
            self.config.mode,
            ciphertext,
            self.key.as_bytes(),
            iv.map(|iv| iv.as_ref()),
            self.config.padding,
        )
    }

    /// Encrypts under a fresh IV from the OS CSPRNG and returns both
    pub fn encrypt_with_random_iv(&self, plaintext: &[u8]) -> Result<(Iv, Vec<u8>)> {
        self.encrypt_with_rng(plaintext, &mut OsRng)
    }

    /// Encrypts under a fresh IV drawn from `rng` and returns both
    ///
    /// ECB has no IV to randomize and is rejected.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<(Iv, Vec<u8>)> {
        if !self.config.mode.requires_iv() {
            return Err(Error::InvalidParameter {
                context: "encrypt_with_random_iv",
                message: "ECB mode does not use an IV".to_string(),
            });
        }

        let iv = generate_iv_with_rng(rng)?;
        debug!("{}: encrypting under a fresh IV", self.config);
        let ciphertext = self.encrypt(plaintext, Some(&iv))?;
        Ok((iv, ciphertext))
    }
}
