// src/cli/handlers.rs
use std::path::{Path, PathBuf};
use console::style;

use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::core::{Result, ToolkitError};
use crate::generators::{self, PasswordGenerator, WordlistResult};
use crate::models::{
    GeneratedPassword, PasswordGenerationOptions, StrengthReport, WordlistReport, WordlistSpec,
};
use crate::utils;

pub const RANDOM_PASSWORD_PREFIX: &str = "falcon_random_pw";
pub const WORDLIST_PREFIX: &str = "falcon_wordlist";

// Run a non-interactive subcommand
pub fn dispatch(command: CliCommand, config: &Config, json: bool) -> Result<()> {
    match command {
        CliCommand::Generate { length, count, output, save } => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                count: count.unwrap_or(config.default_password_count),
            };
            let destination = resolve_destination(config, output, save, RANDOM_PASSWORD_PREFIX);
            handle_generate(&options, destination.as_deref(), json)?;
        }
        CliCommand::Check { password } => {
            let password = match password {
                Some(password) => password,
                None => crate::cli::menu::prompt_password()?,
            };
            handle_check(&password, json)?;
        }
        CliCommand::Wordlist {
            words,
            prefixes,
            suffixes,
            no_numbers,
            leet,
            max_combos,
            output,
            save,
        } => {
            let spec = build_wordlist_spec(
                &words,
                prefixes.as_deref(),
                suffixes.as_deref(),
                !no_numbers,
                leet,
                max_combos.unwrap_or(config.wordlist_max_combos),
            )?;
            let destination = resolve_destination(config, output, save, WORDLIST_PREFIX);
            handle_wordlist(&spec, destination.as_deref(), config.wordlist_preview_size, json)?;
        }
    }

    Ok(())
}

/// Explicit path wins; `--save` picks a timestamped name in the output directory.
pub fn resolve_destination(config: &Config, output: Option<PathBuf>, save: bool, prefix: &str) -> Option<PathBuf> {
    match output {
        Some(path) => Some(path),
        None if save => Some(timestamped_path(config, prefix)),
        None => None,
    }
}

pub fn timestamped_path(config: &Config, prefix: &str) -> PathBuf {
    config.output_directory.join(utils::timestamped_filename(prefix))
}

/// Turn raw comma separated CLI input into a validated spec.
pub fn build_wordlist_spec(
    words: &str,
    prefixes: Option<&str>,
    suffixes: Option<&str>,
    include_numeric_tails: bool,
    include_leet: bool,
    max_combos: usize,
) -> Result<WordlistSpec> {
    let words = utils::parse_list(words);
    if words.is_empty() {
        return Err(ToolkitError::InvalidInput("No words provided.".to_string()));
    }

    Ok(WordlistSpec {
        prefixes: affixes_or_blank(prefixes),
        suffixes: affixes_or_blank(suffixes),
        include_numeric_tails,
        include_leet,
        max_combos,
        ..WordlistSpec::new(words)
    })
}

pub fn affixes_or_blank(raw: Option<&str>) -> Vec<String> {
    let parsed = raw.map(utils::parse_list).unwrap_or_default();
    if parsed.is_empty() {
        vec![String::new()]
    } else {
        parsed
    }
}

pub fn save_items<S: AsRef<str>>(path: &Path, items: &[S]) -> Result<PathBuf> {
    let written = utils::save_list(path, items.iter())?;
    log::info!("Saved {} lines to {}", items.len(), written.display());
    Ok(written)
}

pub fn handle_generate(
    options: &PasswordGenerationOptions,
    destination: Option<&Path>,
    json: bool,
) -> Result<Vec<GeneratedPassword>> {
    let generator = PasswordGenerator::new();
    let generated = generator.generate_with_strength(options);
    log::info!("Generated {} passwords of length {}", generated.len(), options.length);

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        for item in &generated {
            println!("{}", utils::format_generated(item));
        }
    }

    if let Some(path) = destination {
        let passwords: Vec<&str> = generated.iter().map(|g| g.password.as_str()).collect();
        let written = save_items(path, &passwords)?;
        if !json {
            print_saved(&written);
        }
    }

    Ok(generated)
}

pub fn handle_check(password: &str, json: bool) -> Result<StrengthReport> {
    let password = password.trim();
    if password.is_empty() {
        return Err(ToolkitError::InvalidInput("Empty password!".to_string()));
    }

    let report = crate::crypto::analyze_password(password);
    log::info!("Checked a password of length {}: {}", report.length, report.label);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        for line in utils::format_report(&report) {
            println!("{}", line);
        }
        println!(
            "{}",
            style("Tip: Use a long passphrase with mixed types or a password manager.\n").cyan().bold()
        );
    }

    Ok(report)
}

pub fn handle_wordlist(
    spec: &WordlistSpec,
    destination: Option<&Path>,
    preview_size: usize,
    json: bool,
) -> Result<WordlistResult> {
    let result = generators::expand(spec);
    log::info!(
        "Expanded {} words into {} entries (cap {})",
        spec.words.len(),
        result.len(),
        spec.max_combos
    );

    if result.is_empty() {
        log::warn!("Wordlist expansion produced no entries");
    }

    let saved_to = match destination {
        Some(path) => Some(save_items(path, result.entries())?),
        None => None,
    };

    if json {
        let report = WordlistReport {
            count: result.len(),
            saved_to,
            entries: result.entries().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(result);
    }

    print_wordlist_count(&result);
    match saved_to {
        Some(path) => print_saved(&path),
        None => print_preview(&result, preview_size),
    }

    Ok(result)
}

pub fn print_wordlist_count(result: &WordlistResult) {
    println!("{}", style(format!("\nGenerated {} entries", result.len())).green().bold());
}

pub fn print_preview(result: &WordlistResult, preview_size: usize) {
    println!("{}", style(format!("Preview (first {}):", preview_size)).yellow().bold());
    for entry in result.iter().take(preview_size) {
        println!(" - {}", entry);
    }
}

pub fn print_saved(path: &Path) {
    println!("{}", style(format!("🥰 Saved to {}", path.display())).cyan().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_config(dir: &Path) -> Config {
        Config {
            output_directory: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn spec_from_raw_input() {
        let spec = build_wordlist_spec(" cat, ,dog ", Some("my, the"), None, true, false, 10).unwrap();
        assert_eq!(spec.words, vec!["cat", "dog"]);
        assert_eq!(spec.prefixes, vec!["my", "the"]);
        assert_eq!(spec.suffixes, vec![String::new()]);
        assert!(spec.include_numeric_tails);
        assert!(!spec.include_leet);
        assert_eq!(spec.max_combos, 10);
    }

    #[test]
    fn blank_words_are_rejected() {
        let err = build_wordlist_spec(" , ", None, None, true, false, 10).unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidInput(_)));
    }

    #[test]
    fn blank_affixes_fall_back_to_empty_string() {
        assert_eq!(affixes_or_blank(Some(" , ")), vec![String::new()]);
        assert_eq!(affixes_or_blank(None), vec![String::new()]);
    }

    #[test]
    fn destination_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let explicit = PathBuf::from("out.txt");
        assert_eq!(
            resolve_destination(&config, Some(explicit.clone()), false, WORDLIST_PREFIX),
            Some(explicit)
        );
        assert_eq!(resolve_destination(&config, None, false, WORDLIST_PREFIX), None);

        let stamped = resolve_destination(&config, None, true, WORDLIST_PREFIX).unwrap();
        assert_eq!(stamped.parent(), Some(dir.path()));
        let name = stamped.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("falcon_wordlist_") && name.ends_with(".txt"));
    }

    #[test]
    fn generate_saves_every_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pw.txt");
        let options = PasswordGenerationOptions { length: 12, count: 4 };

        let generated = handle_generate(&options, Some(path.as_path()), true).unwrap();
        assert_eq!(generated.len(), 4);

        let saved = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = saved.lines().collect();
        let expected: Vec<&str> = generated.iter().map(|g| g.password.as_str()).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn check_rejects_empty_password() {
        assert!(matches!(handle_check("   ", true), Err(ToolkitError::InvalidInput(_))));
    }

    #[test]
    fn check_returns_report() {
        let report = handle_check("Tr0ub4dor&3", true).unwrap();
        assert_eq!(report.length, 11);
        assert!(report.has_symbol);
    }

    #[test]
    fn check_scores_trimmed_input() {
        let report = handle_check("  abc1  ", true).unwrap();
        assert_eq!(report.length, 4);
        assert_eq!(report, crate::crypto::analyze_password("abc1"));
    }

    #[test]
    fn wordlist_saved_in_generation_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let spec = build_wordlist_spec("cat", None, None, false, true, 100).unwrap();

        let result = handle_wordlist(&spec, Some(path.as_path()), 30, false).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\nc@1\n");
    }

    #[test]
    fn wordlist_respects_cap() {
        let spec = build_wordlist_spec("a,b", None, None, true, false, 3).unwrap();
        let result = handle_wordlist(&spec, None, 30, true).unwrap();
        assert_eq!(result.len(), 3);
    }
}
