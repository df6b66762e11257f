//! Published known-answer vectors loaded from JSON
//!
//! `sp800_38a.json` carries the NIST SP 800-38A appendix F examples for the
//! five modes. Vectors are unpadded; they drive the low-level mode types
//! directly.

use std::path::{Path, PathBuf};
use std::{fs, str::FromStr};

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use symkit_algorithms::{Aes, BlockCipher, Cbc, Cfb, Ctr, Ecb, Iv, Ofb};
use symkit_symmetric::Mode;

/// Errors raised while loading or running a vector
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("vector '{0}' names an unknown mode")]
    Mode(String),

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] symkit_algorithms::Error),

    #[error("{name}: expected {expected}, got {actual}")]
    Mismatch {
        name: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// One encryption example from the vector file
#[derive(Debug, Clone, Deserialize)]
pub struct ModeVector {
    pub name: String,
    pub mode: String,
    pub key: String,
    #[serde(default)]
    pub iv: Option<String>,
    pub plaintext: String,
    pub ciphertext: String,
}

#[derive(Debug, Deserialize)]
struct VectorFile {
    vectors: Vec<ModeVector>,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// Load every vector in `file` under the vectors directory
pub fn load(file: &str) -> Result<Vec<ModeVector>> {
    let path = vectors_dir().join(file);
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: VectorFile = serde_json::from_str(&json)?;
    Ok(parsed.vectors)
}

/// SP 800-38A appendix F vectors, loaded once
pub static SP800_38A: Lazy<Vec<ModeVector>> =
    Lazy::new(|| load("sp800_38a.json").unwrap_or_else(|e| panic!("loading SP 800-38A vectors: {}", e)));

impl ModeVector {
    /// Parsed block mode
    pub fn mode(&self) -> Result<Mode> {
        Mode::from_str(&self.mode).map_err(|_| VectorError::Mode(self.name.clone()))
    }

    fn iv(&self) -> Result<Iv> {
        let bytes = hex::decode(self.iv.as_deref().unwrap_or("00000000000000000000000000000000"))?;
        Ok(Iv::from_slice(&bytes)?)
    }

    /// Encrypt the plaintext with the low-level mode and return the ciphertext
    pub fn encrypt(&self) -> Result<Vec<u8>> {
        let cipher = Aes::new(&hex::decode(&self.key)?)?;
        let plaintext = hex::decode(&self.plaintext)?;
        let out = match self.mode()? {
            Mode::Ecb => Ecb::new(cipher).encrypt(&plaintext)?,
            Mode::Cbc => Cbc::new(cipher, &self.iv()?).encrypt(&plaintext)?,
            Mode::Ctr => Ctr::new(cipher, &self.iv()?).encrypt(&plaintext)?,
            Mode::Cfb => Cfb::new(cipher, &self.iv()?).encrypt(&plaintext)?,
            Mode::Ofb => Ofb::new(cipher, &self.iv()?).encrypt(&plaintext)?,
        };
        Ok(out)
    }

    /// Decrypt the ciphertext with the low-level mode and return the plaintext
    pub fn decrypt(&self) -> Result<Vec<u8>> {
        let cipher = Aes::new(&hex::decode(&self.key)?)?;
        let ciphertext = hex::decode(&self.ciphertext)?;
        let out = match self.mode()? {
            Mode::Ecb => Ecb::new(cipher).decrypt(&ciphertext)?,
            Mode::Cbc => Cbc::new(cipher, &self.iv()?).decrypt(&ciphertext)?,
            Mode::Ctr => Ctr::new(cipher, &self.iv()?).decrypt(&ciphertext)?,
            Mode::Cfb => Cfb::new(cipher, &self.iv()?).decrypt(&ciphertext)?,
            Mode::Ofb => Ofb::new(cipher, &self.iv()?).decrypt(&ciphertext)?,
        };
        Ok(out)
    }

    /// Run both directions and compare against the published values
    pub fn check(&self) -> Result<()> {
        let ct = hex::encode(self.encrypt()?);
        if ct != self.ciphertext {
            return Err(VectorError::Mismatch {
                name: self.name.clone(),
                expected: self.ciphertext.clone(),
                actual: ct,
            });
        }

        let pt = hex::encode(self.decrypt()?);
        if pt != self.plaintext {
            return Err(VectorError::Mismatch {
                name: self.name.clone(),
                expected: self.plaintext.clone(),
                actual: pt,
            });
        }
        Ok(())
    }
}
