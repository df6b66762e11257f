//! Testing utilities, published vectors and benchmarks for the symkit library

pub mod vectors;

use std::sync::Once;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

static LOGGER: Once = Once::new();

/// Route `log` output through `env_logger` in test mode
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Deterministic RNG for reproducible keys and IVs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Non-repeating filler of `len` bytes
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(131) ^ (i >> 3)) as u8).collect()
}

/// Plaintext lengths exercised by the round-trip suites
pub const PLAINTEXT_LENGTHS: [usize; 10] = [0, 1, 7, 15, 16, 17, 31, 32, 33, 100];
