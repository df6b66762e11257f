//! Property-based tests for the block modes and padding

use proptest::prelude::*;
use symkit_algorithms::{Aes, BlockCipher, Cfb, Ctr, Iv, Ofb};
use symkit_symmetric::{decrypt, encrypt, pkcs5_pad, pkcs7_pad, pkcs7_unpad, Mode, Padding};

fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn padding() -> impl Strategy<Value = Padding> {
    prop::sample::select(Padding::ALL.to_vec())
}

proptest! {
    #[test]
    fn high_level_round_trip(
        key in aes_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=300),
        mode in mode(),
        padding in padding(),
    ) {
        let ct = encrypt(mode, &data, &key, Some(&iv), padding).unwrap();
        prop_assert_eq!(ct.len(), (data.len() / 16 + 1) * 16);

        let pt = decrypt(mode, &ct, &key, Some(&iv), padding).unwrap();
        prop_assert_eq!(pt, data);
    }

    #[test]
    fn padding_round_trip(
        data in prop::collection::vec(any::<u8>(), 0..=200),
        block_size in 1usize..=255,
    ) {
        let padded = pkcs7_pad(&data, block_size).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() - data.len() <= block_size);
        prop_assert_eq!(&padded, &pkcs5_pad(&data, block_size).unwrap());
        prop_assert_eq!(pkcs7_unpad(&padded, block_size).unwrap(), &data[..]);
    }

    #[test]
    fn unpad_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..=64),
        padding in padding(),
    ) {
        use symkit_symmetric::PaddingScheme;
        if let Ok(stripped) = padding.unpad(&data, 16) {
            prop_assert!(stripped.len() < data.len());
        }
    }

    #[test]
    fn stream_modes_accept_any_split(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..=200),
        split in any::<prop::sample::Index>(),
    ) {
        let iv = Iv::new(iv);
        let at = split.index(data.len());

        let whole = Ctr::new(Aes::new(&key).unwrap(), &iv).encrypt(&data).unwrap();
        let mut ctr = Ctr::new(Aes::new(&key).unwrap(), &iv);
        let mut parts = ctr.encrypt(&data[..at]).unwrap();
        parts.extend(ctr.encrypt(&data[at..]).unwrap());
        prop_assert_eq!(&parts, &whole);

        let whole = Ofb::new(Aes::new(&key).unwrap(), &iv).encrypt(&data).unwrap();
        let mut ofb = Ofb::new(Aes::new(&key).unwrap(), &iv);
        let mut parts = ofb.encrypt(&data[..at]).unwrap();
        parts.extend(ofb.encrypt(&data[at..]).unwrap());
        prop_assert_eq!(&parts, &whole);

        let whole = Cfb::new(Aes::new(&key).unwrap(), &iv).encrypt(&data).unwrap();
        let mut cfb = Cfb::new(Aes::new(&key).unwrap(), &iv);
        let mut parts = cfb.encrypt(&data[..at]).unwrap();
        parts.extend(cfb.encrypt(&data[at..]).unwrap());
        prop_assert_eq!(&parts, &whole);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..=64),
        mode in mode(),
    ) {
        prop_assume!(key1 != key2);
        let ct1 = encrypt(mode, &data, &key1, Some(&iv), Padding::Pkcs7).unwrap();
        let ct2 = encrypt(mode, &data, &key2, Some(&iv), Padding::Pkcs7).unwrap();
        prop_assert_ne!(ct1, ct2);
    }
}
