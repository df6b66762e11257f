//! Behavioural properties of the high-level block-mode API

use symkit_symmetric::{
    decrypt, decrypt_cbc, encrypt, encrypt_cbc, encrypt_ecb, generate_iv, generate_key,
    generate_key_with_rng, BlockModeCipher, CipherConfig, Mode, Padding,
};
use symkit_tests::{init_logger, sample_plaintext, seeded_rng, PLAINTEXT_LENGTHS};

#[test]
fn round_trip_all_modes_lengths_keys_and_paddings() {
    init_logger();
    let mut rng = seeded_rng(1);

    for key_len in [16, 24, 32] {
        let key = generate_key_with_rng(&mut rng, key_len).unwrap();
        let iv = symkit_symmetric::generate_iv_with_rng(&mut rng).unwrap();

        for mode in Mode::ALL {
            for padding in Padding::ALL {
                for len in PLAINTEXT_LENGTHS {
                    let plaintext = sample_plaintext(len);
                    let ct = encrypt(mode, &plaintext, key.as_bytes(), Some(iv.as_ref()), padding).unwrap();

                    assert_eq!(ct.len() % 16, 0);
                    assert!(ct.len() > len, "{} must add padding", mode);
                    let pt = decrypt(mode, &ct, key.as_bytes(), Some(iv.as_ref()), padding).unwrap();
                    assert_eq!(pt, plaintext, "{}/{} len {}", mode, padding, len);
                }
            }
        }
    }
}

#[test]
fn only_ecb_repeats_identical_blocks() {
    let key = generate_key(16).unwrap();
    let iv = generate_iv().unwrap();
    let plaintext = [b'A'; 64];

    for mode in Mode::ALL {
        let ct = encrypt(mode, &plaintext, key.as_bytes(), Some(iv.as_ref()), Padding::Pkcs7).unwrap();
        let repeats = ct[..16] == ct[16..32] && ct[16..32] == ct[32..48];
        assert_eq!(repeats, mode == Mode::Ecb, "{}", mode);
    }
}

#[test]
fn pkcs7_aligned_input_adds_full_block() {
    let key = [0x0au8; 16];
    let ct = encrypt_ecb(&[0u8; 32], &key, Padding::Pkcs7).unwrap();
    assert_eq!(ct.len(), 48);
}

#[test]
fn message_scenario() {
    init_logger();
    let key = generate_key(16).unwrap();
    let iv = base64::decode("ibv6AGlPdzF0dJXUCrbBYA==").unwrap();

    let ct = encrypt_cbc(b"message", key.as_bytes(), &iv, Padding::Pkcs7).unwrap();
    let pt = decrypt_cbc(&ct, key.as_bytes(), &iv, Padding::Pkcs7).unwrap();
    assert_eq!(pt, b"message");
}

#[test]
fn fresh_iv_changes_ciphertext() {
    let key = generate_key(32).unwrap();
    let plaintext = sample_plaintext(40);

    for mode in [Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb] {
        let a = encrypt(mode, &plaintext, key.as_bytes(), Some(generate_iv().unwrap().as_ref()), Padding::Pkcs5).unwrap();
        let b = encrypt(mode, &plaintext, key.as_bytes(), Some(generate_iv().unwrap().as_ref()), Padding::Pkcs5).unwrap();
        assert_ne!(a, b, "{}", mode);
    }
}

#[test]
fn cbc_tamper_garbles_block_and_flips_next() {
    let key = [0x12u8; 24];
    let iv = [0x34u8; 16];
    let plaintext = sample_plaintext(48);
    let mut ct = encrypt_cbc(&plaintext, &key, &iv, Padding::Pkcs7).unwrap();

    ct[16 + 9] ^= 0x40;
    let pt = decrypt_cbc(&ct, &key, &iv, Padding::Pkcs7).unwrap();
    assert_eq!(pt[..16], plaintext[..16]);
    assert_ne!(pt[16..32], plaintext[16..32]);
    assert_eq!(pt[32 + 9], plaintext[32 + 9] ^ 0x40);
}

#[test]
fn stream_mode_tamper_flips_only_that_bit() {
    let key = [0x56u8; 32];
    let iv = [0x78u8; 16];
    let plaintext = sample_plaintext(48);

    for mode in [Mode::Ctr, Mode::Ofb] {
        let mut ct = encrypt(mode, &plaintext, &key, Some(&iv), Padding::Pkcs7).unwrap();
        ct[5] ^= 0x01;
        let pt = decrypt(mode, &ct, &key, Some(&iv), Padding::Pkcs7).unwrap();

        let mut expected = plaintext.clone();
        expected[5] ^= 0x01;
        assert_eq!(pt, expected, "{}", mode);
    }
}

#[test]
fn config_driven_cipher() {
    init_logger();
    for config in ["cbc/pkcs7", "ctr/pkcs5", "cfb/pkcs7", "ofb/pkcs5"] {
        let config: CipherConfig = config.parse().unwrap();
        let cipher = BlockModeCipher::new(config, generate_key(24).unwrap());
        let (iv, ct) = cipher.encrypt_with_random_iv(b"configured").unwrap();
        assert_eq!(cipher.decrypt(&ct, Some(&iv)).unwrap(), b"configured");
    }
}
