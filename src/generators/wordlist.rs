// src/generators/wordlist.rs
use std::collections::HashSet;
use crate::models::WordlistSpec;

/// Tails appended to every base, tried in this order.
pub const NUMERIC_TAILS: [&str; 5] = ["123", "2024", "2025", "01", "007"];

/// Character substitutions applied by the leet transform.
pub const LEET_TABLE: [(char, char); 10] = [
    ('a', '@'),
    ('A', '4'),
    ('e', '4'),
    ('E', '3'),
    ('o', '0'),
    ('O', '0'),
    ('t', '1'),
    ('T', '7'),
    ('s', '5'),
    ('S', '5'),
];

pub fn leetify(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            LEET_TABLE
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Unique strings in the order they were first generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordlistResult {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl WordlistResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    // Returns true once `cap` entries are held
    fn insert_capped(&mut self, candidate: String, cap: usize) -> bool {
        if !self.seen.contains(&candidate) {
            self.seen.insert(candidate.clone());
            self.entries.push(candidate);
        }
        self.entries.len() >= cap
    }
}

fn or_blank(parts: &[String]) -> &[String] {
    const BLANK: &[String] = &[String::new()];
    if parts.is_empty() {
        BLANK
    } else {
        parts
    }
}

/// Enumerate `prefix + word + suffix` for every combination, optionally
/// followed by each numeric tail and a leet variant of the base.
///
/// Words are the outer loop, prefixes the middle and suffixes the inner;
/// for each base the plain form comes first, then the tails, then leet.
/// Enumeration stops as soon as the result holds `max_combos` entries, so
/// the order above decides which candidates survive truncation.
pub fn expand(spec: &WordlistSpec) -> WordlistResult {
    let mut result = WordlistResult::default();
    let cap = spec.max_combos;
    if cap == 0 {
        return result;
    }

    let prefixes = or_blank(&spec.prefixes);
    let suffixes = or_blank(&spec.suffixes);

    for word in &spec.words {
        for prefix in prefixes {
            for suffix in suffixes {
                let base = format!("{}{}{}", prefix, word, suffix);

                if result.insert_capped(base.clone(), cap) {
                    return result;
                }

                if spec.include_numeric_tails {
                    for tail in NUMERIC_TAILS {
                        if result.insert_capped(format!("{}{}", base, tail), cap) {
                            return result;
                        }
                    }
                }

                if spec.include_leet && result.insert_capped(leetify(&base), cap) {
                    return result;
                }
            }
        }
    }

    log::debug!(
        "Wordlist expansion finished below cap: {} of {} entries",
        result.len(),
        cap
    );
    result
}
