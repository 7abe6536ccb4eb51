// src/cli/commands.rs
use std::path::PathBuf;
use clap::Subcommand;
use crate::utils::positive_arg;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate random strong passwords
    Generate {
        /// Password length
        #[arg(long, short, value_parser = positive_arg)]
        length: Option<usize>,

        /// How many passwords to generate
        #[arg(long, short, value_parser = positive_arg)]
        count: Option<usize>,

        /// Write the passwords to this file
        #[arg(long, short, conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write the passwords to a timestamped file in the output directory
        #[arg(long)]
        save: bool,
    },

    /// Check password strength
    Check {
        /// Password to check (prompted when omitted)
        password: Option<String>,
    },

    /// Create a pattern-based wordlist (authorized use only)
    Wordlist {
        /// Seed words, comma separated
        #[arg(long, short, required = true)]
        words: String,

        /// Prefixes, comma separated
        #[arg(long, short)]
        prefixes: Option<String>,

        /// Suffixes, comma separated
        #[arg(long, short)]
        suffixes: Option<String>,

        /// Skip the numeric tails (123, 2024, 2025, 01, 007)
        #[arg(long)]
        no_numbers: bool,

        /// Add leet-speak variants
        #[arg(long)]
        leet: bool,

        /// Maximum number of entries
        #[arg(long, short, value_parser = positive_arg)]
        max_combos: Option<usize>,

        /// Write the wordlist to this file
        #[arg(long, short, conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write the wordlist to a timestamped file in the output directory
        #[arg(long)]
        save: bool,
    },
}
