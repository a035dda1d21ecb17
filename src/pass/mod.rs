//! Password generation, magic-word masking and strength.

pub mod charset;
mod generate;
pub mod magic;
pub mod strength;

pub use generate::{Generator, MAX_LENGTH, MIN_LENGTH, clamp_length};
pub use strength::Strength;
