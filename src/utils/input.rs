// src/utils/input.rs
use crate::core::{Result, ToolkitError};

/// Split a comma separated list, trimming items and dropping blanks.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a strictly positive integer such as a length, count or cap.
pub fn parse_positive(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| ToolkitError::InvalidInput(format!("'{}' is not a whole number", trimmed)))?;

    if value == 0 {
        return Err(ToolkitError::InvalidInput("value must be at least 1".to_string()));
    }

    Ok(value)
}

// clap value parser
pub fn positive_arg(raw: &str) -> std::result::Result<usize, String> {
    parse_positive(raw).map_err(|e| e.to_string())
}
