//! Rejected inputs surface as typed errors, never panics

use rand::{CryptoRng, RngCore};
use symkit_symmetric::{
    decrypt, decrypt_cbc, decrypt_ofb, encrypt, encrypt_ofb, generate_iv_with_rng, generate_key,
    generate_key_with_rng, pkcs5_unpad, pkcs7_unpad, Error, Mode, Padding,
};
use symkit_tests::init_logger;

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("no entropy"))
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn invalid_key_lengths() {
    for len in [0usize, 1, 15, 129, usize::MAX] {
        assert!(matches!(generate_key(len), Err(Error::InvalidKeyLength { actual, .. }) if actual == len));
    }
    assert!(matches!(
        encrypt(Mode::Ctr, b"x", &[0u8; 31], Some(&[0u8; 16]), Padding::Pkcs7),
        Err(Error::InvalidKeyLength { actual: 31, .. })
    ));
}

#[test]
fn rng_failure_is_entropy_unavailable() {
    assert!(matches!(
        generate_key_with_rng(&mut FailingRng, 32),
        Err(Error::EntropyUnavailable { .. })
    ));
    assert!(matches!(generate_iv_with_rng(&mut FailingRng), Err(Error::EntropyUnavailable { .. })));
}

#[test]
fn wrong_iv_length() {
    let key = [0u8; 16];
    for mode in [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb] {
        assert!(matches!(
            encrypt(mode, b"x", &key, Some(&[0u8; 8]), Padding::Pkcs7),
            Err(Error::InvalidLength { expected: 16, actual: 8, .. })
        ));
    }
}

#[test]
fn misaligned_ciphertext() {
    let key = [0u8; 16];
    let iv = [0u8; 16];
    let ct = encrypt_ofb(b"hello", &key, &iv, Padding::Pkcs7).unwrap();

    assert!(matches!(
        decrypt_ofb(&ct[..15], &key, &iv, Padding::Pkcs7),
        Err(Error::InvalidLength { expected: 16, actual: 15, .. })
    ));
    assert!(matches!(
        decrypt(Mode::Ecb, &[0u8; 33], &key, None, Padding::Pkcs5),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn corrupted_padding() {
    init_logger();
    assert!(matches!(pkcs7_unpad(&[], 16), Err(symkit_algorithms::Error::Padding { .. })));

    let mut block = [3u8; 16];
    block[15] = 0;
    assert!(pkcs5_unpad(&block, 16).is_err());
    block[15] = 17;
    assert!(pkcs7_unpad(&block, 16).is_err());
    block[15] = 3;
    block[13] = 9;
    assert!(pkcs7_unpad(&block, 16).is_err());
    assert_eq!(pkcs5_unpad(&block, 16).unwrap().len(), 13);
}

#[test]
fn garbage_ciphertext_never_panics() {
    init_logger();
    let key = [0x99u8; 16];
    let iv = [0x11u8; 16];

    for seed in 0u8..64 {
        let ct: Vec<u8> = (0..32).map(|i| seed.wrapping_mul(37).wrapping_add(i)).collect();
        for padding in Padding::ALL {
            match decrypt_cbc(&ct, &key, &iv, padding) {
                Ok(pt) => assert!(pt.len() < 32),
                Err(e) => assert!(matches!(e, Error::PaddingCorrupted { .. })),
            }
        }
    }
}

#[test]
fn missing_iv_for_chaining_modes() {
    assert!(matches!(
        decrypt(Mode::Cfb, &[0u8; 16], &[0u8; 16], None, Padding::Pkcs7),
        Err(Error::InvalidParameter { .. })
    ));
}
