//! One-call encrypt/decrypt for each block mode
//!
//! Every function builds a fresh AES instance from the raw key, pads (or
//! unpads) with the caller's chosen [`Padding`], and drives the matching
//! low-level mode from `symkit-algorithms`. All five modes pad, the stream
//! modes included, so every ciphertext produced here is a non-empty multiple
//! of 16 bytes and decrypt rejects anything else up front.

use log::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

use symkit_algorithms::block::BLOCK_SIZE;
use symkit_algorithms::{Aes, BlockCipher, Cbc, Cfb, Ctr, Ecb, Iv, Ofb, Padding, PaddingScheme};

use crate::config::Mode;
use crate::error::{validate, Error, Result, SymmetricResultExt};

fn block_cipher(key: &[u8], context: &'static str) -> Result<Aes> {
    validate::key_length(context, key.len())?;
    Aes::new(key).map_primitive_err(context)
}

fn parse_iv(iv: &[u8], context: &'static str) -> Result<Iv> {
    Iv::from_slice(iv).map_primitive_err(context)
}

fn pad(plaintext: &[u8], padding: Padding, context: &'static str) -> Result<Zeroizing<Vec<u8>>> {
    padding
        .pad(plaintext, BLOCK_SIZE)
        .map(Zeroizing::new)
        .map_primitive_err(context)
}

/// Strip padding from a decrypted buffer, wiping the removed tail
fn unpad(mut buf: Vec<u8>, padding: Padding, context: &'static str) -> Result<Vec<u8>> {
    let len = match padding.unpad(&buf, BLOCK_SIZE) {
        Ok(unpadded) => unpadded.len(),
        Err(err) => {
            debug!("{}: {} unpad failed: {}", context, padding, err);
            buf.zeroize();
            return Err(Error::from(err).with_context(context));
        }
    };
    buf[len..].zeroize();
    buf.truncate(len);
    Ok(buf)
}

fn check_ciphertext(ciphertext: &[u8], context: &'static str) -> Result<()> {
    validate::block_aligned(context, ciphertext.len(), BLOCK_SIZE)
}

/// Encrypts `plaintext` with AES-ECB after padding
///
/// ECB leaks repeated blocks; prefer any of the chaining modes.
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt_ecb";
    trace!("{}: {} bytes, {}", CONTEXT, plaintext.len(), padding);
    warn!("ECB mode does not hide plaintext patterns");

    let ecb = Ecb::new(block_cipher(key, CONTEXT)?);
    let padded = pad(plaintext, padding, CONTEXT)?;
    ecb.encrypt(&padded).map_primitive_err(CONTEXT)
}

/// Decrypts an AES-ECB ciphertext and strips the padding
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt_ecb";
    trace!("{}: {} bytes, {}", CONTEXT, ciphertext.len(), padding);
    warn!("ECB mode does not hide plaintext patterns");

    let ecb = Ecb::new(block_cipher(key, CONTEXT)?);
    check_ciphertext(ciphertext, CONTEXT)?;
    let buf = ecb.decrypt(ciphertext).map_primitive_err(CONTEXT)?;
    unpad(buf, padding, CONTEXT)
}

/// Encrypts `plaintext` with AES-CBC after padding
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt_cbc";
    trace!("{}: {} bytes, {}", CONTEXT, plaintext.len(), padding);

    let cbc = Cbc::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    let padded = pad(plaintext, padding, CONTEXT)?;
    cbc.encrypt(&padded).map_primitive_err(CONTEXT)
}

/// Decrypts an AES-CBC ciphertext and strips the padding
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt_cbc";
    trace!("{}: {} bytes, {}", CONTEXT, ciphertext.len(), padding);

    let cbc = Cbc::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    check_ciphertext(ciphertext, CONTEXT)?;
    let buf = cbc.decrypt(ciphertext).map_primitive_err(CONTEXT)?;
    unpad(buf, padding, CONTEXT)
}

/// Encrypts `plaintext` with AES-CTR after padding
///
/// The whole IV is the initial 128-bit counter block.
pub fn encrypt_ctr(plaintext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt_ctr";
    trace!("{}: {} bytes, {}", CONTEXT, plaintext.len(), padding);

    let mut ctr = Ctr::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    let padded = pad(plaintext, padding, CONTEXT)?;
    ctr.encrypt(&padded).map_primitive_err(CONTEXT)
}

/// Decrypts an AES-CTR ciphertext and strips the padding
pub fn decrypt_ctr(ciphertext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt_ctr";
    trace!("{}: {} bytes, {}", CONTEXT, ciphertext.len(), padding);

    let mut ctr = Ctr::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    check_ciphertext(ciphertext, CONTEXT)?;
    let buf = ctr.decrypt(ciphertext).map_primitive_err(CONTEXT)?;
    unpad(buf, padding, CONTEXT)
}

/// Encrypts `plaintext` with AES-CFB-128 after padding
pub fn encrypt_cfb(plaintext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt_cfb";
    trace!("{}: {} bytes, {}", CONTEXT, plaintext.len(), padding);

    let mut cfb = Cfb::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    let padded = pad(plaintext, padding, CONTEXT)?;
    cfb.encrypt(&padded).map_primitive_err(CONTEXT)
}

/// Decrypts an AES-CFB-128 ciphertext and strips the padding
pub fn decrypt_cfb(ciphertext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt_cfb";
    trace!("{}: {} bytes, {}", CONTEXT, ciphertext.len(), padding);

    let mut cfb = Cfb::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    check_ciphertext(ciphertext, CONTEXT)?;
    let buf = cfb.decrypt(ciphertext).map_primitive_err(CONTEXT)?;
    unpad(buf, padding, CONTEXT)
}

/// Encrypts `plaintext` with AES-OFB after padding
pub fn encrypt_ofb(plaintext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt_ofb";
    trace!("{}: {} bytes, {}", CONTEXT, plaintext.len(), padding);

    let mut ofb = Ofb::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    let padded = pad(plaintext, padding, CONTEXT)?;
    ofb.encrypt(&padded).map_primitive_err(CONTEXT)
}

/// Decrypts an AES-OFB ciphertext and strips the padding
pub fn decrypt_ofb(ciphertext: &[u8], key: &[u8], iv: &[u8], padding: Padding) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt_ofb";
    trace!("{}: {} bytes, {}", CONTEXT, ciphertext.len(), padding);

    let mut ofb = Ofb::new(block_cipher(key, CONTEXT)?, &parse_iv(iv, CONTEXT)?);
    check_ciphertext(ciphertext, CONTEXT)?;
    let buf = ofb.decrypt(ciphertext).map_primitive_err(CONTEXT)?;
    unpad(buf, padding, CONTEXT)
}

fn require_iv<'a>(mode: Mode, iv: Option<&'a [u8]>, context: &'static str) -> Result<&'a [u8]> {
    iv.ok_or_else(|| Error::InvalidParameter {
        context,
        message: format!("{} mode requires a 16-byte IV", mode),
    })
}

/// Encrypts with the mode selected at runtime
///
/// `iv` must be present for every mode except ECB, which ignores it.
pub fn encrypt(
    mode: Mode,
    plaintext: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
    padding: Padding,
) -> Result<Vec<u8>> {
    const CONTEXT: &str = "encrypt";
    match mode {
        Mode::Ecb => {
            if iv.is_some() {
                debug!("{}: ECB ignores the supplied IV", CONTEXT);
            }
            encrypt_ecb(plaintext, key, padding)
        }
        Mode::Cbc => encrypt_cbc(plaintext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Ctr => encrypt_ctr(plaintext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Cfb => encrypt_cfb(plaintext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Ofb => encrypt_ofb(plaintext, key, require_iv(mode, iv, CONTEXT)?, padding),
    }
}

/// Decrypts with the mode selected at runtime
///
/// `iv` must be present for every mode except ECB, which ignores it.
pub fn decrypt(
    mode: Mode,
    ciphertext: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
    padding: Padding,
) -> Result<Vec<u8>> {
    const CONTEXT: &str = "decrypt";
    match mode {
        Mode::Ecb => {
            if iv.is_some() {
                debug!("{}: ECB ignores the supplied IV", CONTEXT);
            }
            decrypt_ecb(ciphertext, key, padding)
        }
        Mode::Cbc => decrypt_cbc(ciphertext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Ctr => decrypt_ctr(ciphertext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Cfb => decrypt_cfb(ciphertext, key, require_iv(mode, iv, CONTEXT)?, padding),
        Mode::Ofb => decrypt_ofb(ciphertext, key, require_iv(mode, iv, CONTEXT)?, padding),
    }
}
