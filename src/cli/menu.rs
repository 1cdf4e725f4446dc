// src/cli/menu.rs
use inquire::{Confirm, Password, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::print_report;
use crate::core::config::Config;
use crate::generators::generate_password;
use crate::history::{FileHistoryStore, History};
use crate::scoring::check_password_strength;

pub fn run_cli_menu(
    config: &Config,
    history: &History<FileHistoryStore>,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          PASSWORD MASTER             ║");
    println!("╚══════════════════════════════════════╝");

    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔐  Generate a password",
            "📊  Check password strength",
            "📜  View password history",
            "🗑️  Clear password history",
            "🚪  Exit",
        ];

        let selection = Select::new("What would you like to do?", options).prompt()?;

        match selection {
            "🔐  Generate a password" => {
                let length: usize = Text::new("Password length:")
                    .with_default(&config.default_password_length.to_string())
                    .prompt()
                    .and_then(|s| {
                        s.parse()
                            .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                    })?;

                match generate_password(length) {
                    Ok(password) => {
                        println!("\nGenerated Password: {}", password);
                        print_report(&check_password_strength(&password));
                        history.record(&password);
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                }

                // Wait for user to press enter
                let _ = Text::new("Press enter to continue...").prompt();
            }
            "📊  Check password strength" => {
                let password = Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?;

                if password.is_empty() {
                    println!("❗ Enter or generate a password first.");
                    continue;
                }

                print_report(&check_password_strength(&password));

                let _ = Text::new("Press enter to continue...").prompt();
            }
            "📜  View password history" => {
                let entries = history.entries();

                if entries.is_empty() {
                    println!("No history yet.");
                } else {
                    println!("Password History:");
                    for (i, password) in entries.iter().enumerate() {
                        println!("{}. {}", i + 1, password);
                    }
                }

                let _ = Text::new("Press enter to continue...").prompt();
            }
            "🗑️  Clear password history" => {
                let confirm = Confirm::new("Are you sure you want to clear the password history?")
                    .with_default(false)
                    .prompt()?;

                if confirm {
                    history.clear();
                    println!("✅ Password history cleared");
                }
            }
            "🚪  Exit" => {
                exit_requested = true;
            }
            _ => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
