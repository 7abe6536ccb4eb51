// src/utils/format.rs
use console::style;
use crate::models::{GeneratedPassword, StrengthLabel, StrengthReport};

// Colour a strength label for terminal output
pub fn format_label(label: StrengthLabel) -> String {
    let text = style(label.to_string()).bold();
    match label {
        StrengthLabel::VeryWeak | StrengthLabel::Weak => text.red().to_string(),
        StrengthLabel::Moderate => text.yellow().to_string(),
        StrengthLabel::Strong | StrengthLabel::VeryStrong => text.green().to_string(),
    }
}

pub fn format_entropy(entropy: f64) -> String {
    format!("{:.2}", entropy)
}

pub fn check_mark(present: bool) -> &'static str {
    if present {
        "✔"
    } else {
        "✘"
    }
}

// One line per generated password: `<password> -> <label> (Entropy <bits>)`
pub fn format_generated(item: &GeneratedPassword) -> String {
    format!(
        "{} -> {} (Entropy {})",
        style(&item.password).green().bold(),
        format_label(item.strength.label),
        format_entropy(item.strength.entropy)
    )
}

pub fn format_report(report: &StrengthReport) -> Vec<String> {
    vec![
        format!("Length: {}", report.length),
        format!("Lowercase: {}", check_mark(report.has_lower)),
        format!("Uppercase: {}", check_mark(report.has_upper)),
        format!("Digits: {}", check_mark(report.has_digit)),
        format!("Symbols: {}", check_mark(report.has_symbol)),
        format!("Entropy: {}", format_entropy(report.entropy)),
        format!("Strength: {}", format_label(report.label)),
    ]
}
