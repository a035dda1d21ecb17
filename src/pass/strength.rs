//! Password strength estimate.

/// Estimated entropy of a password and its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    pub bits: f64,
    pub label: &'static str,
}

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Pool size implied by the character classes present in `value`.
fn pool_size(value: &str) -> usize {
    let (mut lower, mut upper, mut digit, mut punct) = (false, false, false, false);
    let mut other: Vec<char> = Vec::new();

    for c in value.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            c if c.is_ascii_punctuation() => punct = true,
            c if !other.contains(&c) => other.push(c),
            _ => {}
        }
    }

    let mut size = other.len();
    if lower {
        size += 26;
    }
    if upper {
        size += 26;
    }
    if digit {
        size += 10;
    }
    if punct {
        size += 32;
    }
    size
}

/// Estimate the strength of an existing value.
pub fn estimate(value: &str) -> Strength {
    let bits = calculate_entropy(value.chars().count(), pool_size(value));
    Strength {
        bits,
        label: entropy_strength(bits),
    }
}
