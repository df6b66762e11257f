//! Block cipher modes of operation
//!
//! ECB and CBC transform whole blocks and reject input that is not block
//! aligned; callers pad first. CTR, CFB and OFB turn the block cipher into a
//! keystream generator and accept any length.
//!
//! | Mode | IV | Chaining input | Error propagation on decrypt |
//! |------|----|----------------|------------------------------|
//! | ECB  | no  | none | block only |
//! | CBC  | yes | previous ciphertext | block i garbled, bit flip in i+1 |
//! | CTR  | yes | counter | bit for bit |
//! | CFB  | yes | previous ciphertext | bit flip in i, block i+1 garbled |
//! | OFB  | yes | previous keystream | bit for bit |

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// XOR `src` into `dst` byte by byte
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
