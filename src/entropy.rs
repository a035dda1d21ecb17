//! Secure randomness for password generation.
//!
//! Everything that draws characters or flips coins goes through a generator
//! bounded by [`SecureRng`], so only cryptographically secure sources can be
//! plugged in. Production code uses the operating system source.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Marker for generators fit for password material.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRng for T {}

/// Operating system entropy.
pub fn os() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS entropy (getrandom)"
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn index<R: SecureRng>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

/// Fair coin.
#[inline]
pub fn coin<R: SecureRng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
