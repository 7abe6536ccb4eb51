// src/crypto.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use crate::models::{StrengthLabel, StrengthReport};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = PUNCTUATION.len() as u32;

/// Every character the random generator may emit.
pub fn password_alphabet() -> Vec<char> {
    LOWERCASE
        .chars()
        .chain(UPPERCASE.chars())
        .chain(DIGITS.chars())
        .chain(PUNCTUATION.chars())
        .collect()
}

fn is_symbol(c: char) -> bool {
    PUNCTUATION.contains(c)
}

#[derive(Debug, Default, Clone, Copy)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn detect(sample: &str) -> Self {
        let mut classes = Self::default();
        for c in sample.chars() {
            classes.lower |= c.is_lowercase();
            classes.upper |= c.is_uppercase();
            classes.digit |= c.is_numeric();
            classes.symbol |= is_symbol(c);
        }
        classes
    }

    fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += LOWERCASE_POOL;
        }
        if self.upper {
            pool += UPPERCASE_POOL;
        }
        if self.digit {
            pool += DIGIT_POOL;
        }
        if self.symbol {
            pool += SYMBOL_POOL;
        }
        pool
    }
}

/// Theoretical bit strength: `log2(pool) * length`, where the pool is the
/// sum of the sizes of every character class present in `sample`.
///
/// Case and digit detection is Unicode-aware, but each class keeps its
/// fixed pool size. Characters outside the four classes, such as spaces,
/// add to the length but not the pool. A sample with no recognised class
/// scores exactly zero.
pub fn estimate_entropy(sample: &str) -> f64 {
    match CharClasses::detect(sample).pool_size() {
        0 => 0.0,
        pool => f64::from(pool).log2() * sample.chars().count() as f64,
    }
}

// Thresholds are inclusive on the lower bound
pub fn strength_label(entropy: f64) -> StrengthLabel {
    if entropy.is_nan() || entropy < 28.0 {
        StrengthLabel::VeryWeak
    } else if entropy < 36.0 {
        StrengthLabel::Weak
    } else if entropy < 60.0 {
        StrengthLabel::Moderate
    } else if entropy < 80.0 {
        StrengthLabel::Strong
    } else {
        StrengthLabel::VeryStrong
    }
}

// Analyze password strength
pub fn analyze_password(sample: &str) -> StrengthReport {
    let classes = CharClasses::detect(sample);
    let entropy = estimate_entropy(sample);

    StrengthReport {
        length: sample.chars().count(),
        has_lower: classes.lower,
        has_upper: classes.upper,
        has_digit: classes.digit,
        has_symbol: classes.symbol,
        entropy,
        label: strength_label(entropy),
    }
}

/// Draw `length` characters uniformly, with replacement, from `alphabet`
/// using the operating system CSPRNG.
///
/// Returns an empty string when `alphabet` is empty.
pub fn generate_password(alphabet: &[char], length: usize) -> String {
    if alphabet.is_empty() {
        return String::new();
    }

    let dist = Uniform::from(0..alphabet.len());
    (0..length)
        .map(|_| alphabet[dist.sample(&mut OsRng)])
        .collect()
}
