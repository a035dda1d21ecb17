//! Character set building for password generation.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Build the alphabet for one generation call.
///
/// Letters and digits are always present, so the result is never empty.
pub fn build(use_punctuation: bool) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(use_punctuation));

    chars.extend(LOWERCASE.chars());
    chars.extend(UPPERCASE.chars());
    chars.extend(DIGITS.chars());

    if use_punctuation {
        chars.extend(PUNCTUATION.chars());
    }

    chars
}

/// Alphabet size without building it.
pub fn size(use_punctuation: bool) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len() + DIGITS.len();
    if use_punctuation {
        size += PUNCTUATION.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_built_alphabets() {
        assert_eq!(build(false).len(), 62);
        assert_eq!(build(true).len(), 94);
        assert_eq!(size(false), 62);
        assert_eq!(size(true), 94);
    }

    #[test]
    fn punctuation_set_is_ascii_punctuation() {
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
        assert_eq!(
            PUNCTUATION.len(),
            (0u8..128).filter(|b| b.is_ascii_punctuation()).count()
        );
    }

    #[test]
    fn toggle_off_has_only_alphanumerics() {
        assert!(build(false).iter().all(|c| c.is_ascii_alphanumeric()));
    }
}
