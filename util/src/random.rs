//! Random byte and string generation.
//!
//! All functions take the generator as an argument, so callers control the
//! randomness source: `OsRng` for secrets, a seeded `StdRng` for
//! deterministic tests.

use rand::{Rng, RngCore};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returns `n` bytes drawn from `rng`.
///
/// # Panics
///
/// Panics when `n` is less than 1.
pub fn bytes<R: RngCore>(rng: &mut R, n: usize) -> Vec<u8> {
    assert!(n >= 1, "n must be at least 1");

    let mut buf = vec![0u8; n];
    rng.fill_bytes(&mut buf);
    buf
}

/// Returns an `n`-character string of random alphanumeric characters, both
/// lower and uppercase.
///
/// # Panics
///
/// Panics when `n` is less than 1.
pub fn alphanumeric<R: Rng>(rng: &mut R, n: usize) -> String {
    assert!(n >= 1, "n must be at least 1");

    (0..n)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
