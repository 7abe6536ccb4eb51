// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Falcon password toolkit: generate, check and build wordlists", long_about = None)]
pub struct Args {
    /// Print results as JSON instead of styled text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu() {
        let args = Args::try_parse_from(["falcon"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn generate_arguments() {
        let args = Args::try_parse_from(["falcon", "generate", "-l", "24", "-c", "3", "--json"]).unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate { length, count, output, save }) => {
                assert_eq!(length, Some(24));
                assert_eq!(count, Some(3));
                assert!(output.is_none());
                assert!(!save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn generate_rejects_non_positive_numbers() {
        assert!(Args::try_parse_from(["falcon", "generate", "-l", "0"]).is_err());
        assert!(Args::try_parse_from(["falcon", "generate", "-c", "ten"]).is_err());
    }

    #[test]
    fn output_and_save_conflict() {
        assert!(Args::try_parse_from(["falcon", "generate", "--save", "-o", "x.txt"]).is_err());
    }

    #[test]
    fn check_password_is_optional() {
        let args = Args::try_parse_from(["falcon", "check", "hunter2"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Check { password: Some(ref p) }) if p == "hunter2"));

        let args = Args::try_parse_from(["falcon", "check"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Check { password: None })));
    }

    #[test]
    fn wordlist_arguments() {
        let args = Args::try_parse_from([
            "falcon", "wordlist", "-w", "cat, dog", "-p", "my", "-s", "!,?", "--no-numbers", "--leet", "-m", "500",
        ])
        .unwrap();

        match args.command {
            Some(CliCommand::Wordlist { words, prefixes, suffixes, no_numbers, leet, max_combos, .. }) => {
                assert_eq!(words, "cat, dog");
                assert_eq!(prefixes.as_deref(), Some("my"));
                assert_eq!(suffixes.as_deref(), Some("!,?"));
                assert!(no_numbers);
                assert!(leet);
                assert_eq!(max_combos, Some(500));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn wordlist_requires_words() {
        assert!(Args::try_parse_from(["falcon", "wordlist"]).is_err());
    }
}
