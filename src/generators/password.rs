use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthReport};

pub struct PasswordGenerator {
    alphabet: Vec<char>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            alphabet: crate::crypto::password_alphabet(),
        }
    }

    /// Exactly `options.count` independent passwords; collisions are not filtered.
    pub fn generate_passwords(&self, options: &PasswordGenerationOptions) -> Vec<String> {
        (0..options.count)
            .map(|_| crate::crypto::generate_password(&self.alphabet, options.length))
            .collect()
    }

    pub fn generate_with_strength(&self, options: &PasswordGenerationOptions) -> Vec<GeneratedPassword> {
        self.generate_passwords(options)
            .into_iter()
            .map(|password| {
                let strength = self.analyze_password_strength(&password);
                GeneratedPassword { password, strength }
            })
            .collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        crate::crypto::analyze_password(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
