//! Fixed-length digest stretching by XOR folding
//!
//! The SHA-512 digest is cut into consecutive `length`-byte segments, the last
//! one zero-padded, and the segments are XORed together. Equivalent to folding
//! the lowercase hex encoding in `2 * length`-character chunks padded with `'0'`,
//! since both the digest and every chunk are a whole number of bytes.

use sha2::{Digest, Sha512};

use crate::io::configuration::DIGEST_BYTES;
use crate::io::error::{Result, TilehashError, invalid_parameter};

/// Fold the SHA-512 digest of `input` down to `length` bytes
///
/// # Errors
///
/// Returns an error if:
/// - `length` is zero
/// - `length` exceeds the 64-byte digest size
pub fn fold(input: &[u8], length: usize) -> Result<Vec<u8>> {
    if length == 0 {
        return Err(invalid_parameter(
            "length",
            &length,
            &"folded output needs at least one byte",
        ));
    }
    if length > DIGEST_BYTES {
        return Err(TilehashError::LengthExceeded {
            requested: length,
            max: DIGEST_BYTES,
        });
    }

    let digest = Sha512::digest(input);

    let mut folded = vec![0u8; length];
    for segment in digest.chunks(length) {
        // A short final segment behaves as if padded with zero bytes
        for (acc, byte) in folded.iter_mut().zip(segment) {
            *acc ^= byte;
        }
    }

    Ok(folded)
}
