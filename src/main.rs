use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod crypto;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Exiting...");
            should_exit.store(true, Ordering::SeqCst);
            cli::menu::print_interrupted();
            std::process::exit(0);
        })?;
    }

    let outcome = match args.command {
        Some(command) => cli::handlers::dispatch(command, &config, args.json),
        None => cli::menu::run_cli_menu(&config, should_exit),
    };

    if let Err(e) = outcome {
        log::error!("{}", e);
        return Err(e.into());
    }

    log::info!("✅ Falcon toolkit shutdown complete.");
    Ok(())
}
