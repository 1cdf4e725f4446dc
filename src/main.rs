// src/main.rs
use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

mod cli;
mod core;
mod generators;
mod history;
mod models;
mod scoring;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::history::History;

fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting Password Master");

    let history_file = args
        .history_file
        .clone()
        .unwrap_or_else(|| config.history_file.clone());
    let history = History::open(history_file, config.max_history);

    let result = match &args.command {
        Some(CliCommand::Generate {
            length,
            count,
            no_history,
        }) => {
            let length = length.unwrap_or(config.default_password_length);
            cli::handlers::handle_generate(&history, length, *count, !no_history, args.json)
        }
        Some(CliCommand::Check { password }) => {
            let password = match password {
                Some(p) => p.clone(),
                // Prompt so the password stays off the shell history
                None => inquire::Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
            };
            cli::handlers::handle_check(&password, args.json)
        }
        Some(CliCommand::History) => cli::handlers::handle_history(&history, args.json),
        Some(CliCommand::ClearHistory) => cli::handlers::handle_clear_history(&history),
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));

            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    should_exit.store(true, Ordering::SeqCst);
                    println!("\n👋 Goodbye!");
                    std::process::exit(0);
                })
                .expect("Failed to set Ctrl+C handler");
            }

            cli::menu::run_cli_menu(&config, &history, should_exit)
        }
    };

    result.map_err(|e| {
        log::error!("{}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    log::info!("✅ Password Master shutdown complete");
    Ok(())
}
