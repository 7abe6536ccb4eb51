// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use console::style;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::{self, RANDOM_PASSWORD_PREFIX, WORDLIST_PREFIX};
use crate::core::config::Config;
use crate::core::{Result, ToolkitError};
use crate::generators;
use crate::models::PasswordGenerationOptions;
use crate::utils;

const GENERATE: &str = "🔐  Generate Random Strong Passwords";
const CHECK: &str = "🔍  Check Password Strength";
const WORDLIST: &str = "📜  Create Pattern-based Wordlist";
const EXIT: &str = "❌  Exit";

pub fn banner() {
    println!("{}", style("\n=======🦅🦅🦅🦅🦅=====================").cyan().bold());
    println!("{}", style("   FALCON PASSWORD TOOLKIT ").cyan().bold());
    println!("{}", style("==========🦅🦅🦅🦅🦅🦅==================").cyan().bold());
}

pub fn print_interrupted() {
    println!("\n{}", style("Interrupted by user. Exiting...").red().bold());
}

fn print_error(message: impl std::fmt::Display) {
    println!("{}", style(format!("🥵 {}", message)).red().bold());
}

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<()> {
    banner();

    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![GENERATE, CHECK, WORDLIST, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        let outcome = match selection {
            Ok(Some(GENERATE)) => generate_flow(config),
            Ok(Some(CHECK)) => check_flow(),
            Ok(Some(WORDLIST)) => wordlist_flow(config),
            Ok(Some(_)) | Ok(None) => {
                exit_requested = true;
                Ok(())
            }
            Err(InquireError::OperationInterrupted) => {
                print_interrupted();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match outcome {
            Ok(()) => {}
            Err(ToolkitError::PromptError(InquireError::OperationInterrupted)) => {
                print_interrupted();
                return Ok(());
            }
            // Esc inside a flow just returns to the menu
            Err(ToolkitError::PromptError(InquireError::OperationCanceled)) => {}
            Err(ToolkitError::InvalidInput(message)) => print_error(message),
            Err(ToolkitError::IoError(e)) => {
                log::error!("File operation failed: {}", e);
                print_error(format!("Could not save file: {}", e));
            }
            Err(e) => return Err(e),
        }
    }

    println!("{}", style("Bye. Stay Secure, Falcon!").cyan().bold());
    Ok(())
}

/// Keep asking until the answer is a positive integer.
pub fn prompt_positive(message: &str, default: usize) -> Result<usize> {
    let default = default.to_string();
    loop {
        let raw = Text::new(message).with_default(&default).prompt()?;
        match utils::parse_positive(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::debug!("Rejected numeric input: {}", e);
                print_error(format!("🤦 Invalid input! Enter numbers only. ({})", e));
            }
        }
    }
}

pub fn prompt_password() -> Result<String> {
    let password = Password::new("Enter password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    Ok(password)
}

fn confirm(message: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new(message).with_default(default).prompt()?)
}

fn generate_flow(config: &Config) -> Result<()> {
    let options = PasswordGenerationOptions {
        length: prompt_positive("Password length:", config.default_password_length)?,
        count: prompt_positive("How many:", config.default_password_count)?,
    };

    let generated = handlers::handle_generate(&options, None, false)?;

    if confirm("Save to file?", false)? {
        let passwords: Vec<&str> = generated.iter().map(|g| g.password.as_str()).collect();
        let path = handlers::timestamped_path(config, RANDOM_PASSWORD_PREFIX);
        let written = handlers::save_items(&path, &passwords)?;
        handlers::print_saved(&written);
    }

    Ok(())
}

fn check_flow() -> Result<()> {
    let password = prompt_password()?;
    handlers::handle_check(&password, false)?;
    Ok(())
}

fn prompt_affixes(question: &str, message: &str) -> Result<Option<String>> {
    if confirm(question, false)? {
        Ok(Some(Text::new(message).prompt()?))
    } else {
        Ok(None)
    }
}

fn wordlist_flow(config: &Config) -> Result<()> {
    println!("{}", style("** AUTHORIZED USE ONLY **").yellow().bold());

    let words = Text::new("Words (comma separated):").prompt()?;
    if utils::parse_list(&words).is_empty() {
        return Err(ToolkitError::InvalidInput("No words provided.".to_string()));
    }

    let prefixes = prompt_affixes("Use prefixes?", "Prefixes (comma separated):")?;
    let suffixes = prompt_affixes("Use suffixes?", "Suffixes (comma separated):")?;
    let include_numeric_tails = confirm("Include numeric tails?", true)?;
    let include_leet = confirm("Include leet variants?", false)?;

    let spec = handlers::build_wordlist_spec(
        &words,
        prefixes.as_deref(),
        suffixes.as_deref(),
        include_numeric_tails,
        include_leet,
        config.wordlist_max_combos,
    )?;

    let result = generators::expand(&spec);
    log::info!("Expanded {} words into {} entries", spec.words.len(), result.len());
    handlers::print_wordlist_count(&result);

    if confirm("Save to file?", false)? {
        let path = handlers::timestamped_path(config, WORDLIST_PREFIX);
        let written = handlers::save_items(&path, result.entries())?;
        handlers::print_saved(&written);
    } else {
        handlers::print_preview(&result, config.wordlist_preview_size);
    }

    Ok(())
}
