//! Password generation.

use log::debug;
use rand::rngs::OsRng;

use super::{charset, magic};
use crate::entropy::{self, SecureRng};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

/// Clamp a requested length into the supported range.
#[inline]
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Password generator bound to a secure random source.
pub struct Generator<R = OsRng> {
    rng: R,
}

impl Generator<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(entropy::os())
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a password of `length` characters (clamped to 8..=32), each
    /// drawn independently from letters, digits and optionally punctuation.
    pub fn generate(&mut self, length: usize, use_punctuation: bool) -> String {
        let length = clamp_length(length);
        let chars = charset::build(use_punctuation);
        debug!(
            "generating {} chars from a {}-char alphabet",
            length,
            chars.len()
        );

        (0..length)
            .map(|_| chars[entropy::index(&mut self.rng, chars.len())])
            .collect()
    }

    /// Derive a magic-word variant of `remembered`. See [`magic::mask`].
    pub fn mask(&mut self, remembered: &str) -> String {
        magic::mask(&mut self.rng, remembered)
    }
}
