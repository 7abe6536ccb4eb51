// src/models.rs
use std::fmt;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Qualitative strength bucket, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

// Result of analyzing a single password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub entropy: f64, // bits, unrounded
    pub label: StrengthLabel,
}

// Password generation options
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub count: usize,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            count: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthReport,
}

/// Input to the wordlist expander.
///
/// Empty `prefixes` or `suffixes` behave as a single empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistSpec {
    pub words: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub include_numeric_tails: bool,
    pub include_leet: bool,
    pub max_combos: usize,
}

impl WordlistSpec {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }
}

impl Default for WordlistSpec {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            prefixes: vec![String::new()],
            suffixes: vec![String::new()],
            include_numeric_tails: true,
            include_leet: false,
            max_combos: 50_000,
        }
    }
}

// Summary printed for `--json` wordlist runs
#[derive(Debug, Clone, Serialize)]
pub struct WordlistReport {
    pub count: usize,
    pub saved_to: Option<PathBuf>,
    pub entries: Vec<String>,
}
