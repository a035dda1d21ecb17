//! Generation settings, held in memory for the life of the process.

use crate::pass::{MIN_LENGTH, clamp_length};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_punctuation: bool,
    pub show_strength: bool,
    pub to_clipboard: bool,
    pub magic_word: Option<String>,
}

impl Settings {
    /// Set the length, clamping into range. Returns true if clamping changed it.
    pub fn set_length(&mut self, requested: usize) -> bool {
        self.pass_length = clamp_length(requested);
        self.pass_length != requested
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: MIN_LENGTH,
            number_of_passwords: 1,
            use_punctuation: true,
            show_strength: false,
            to_clipboard: false,
            magic_word: None,
        }
    }
}
