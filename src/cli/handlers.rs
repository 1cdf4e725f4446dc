// src/cli/handlers.rs
use std::error::Error;

use crate::generators::generate_password;
use crate::history::{FileHistoryStore, History};
use crate::models::StrengthReport;
use crate::scoring::check_password_strength;

// Handlers for CLI commands

pub fn handle_generate(
    history: &History<FileHistoryStore>,
    length: usize,
    count: u32,
    record: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    for _ in 0..count {
        let password = generate_password(length)?;
        let report = check_password_strength(&password);

        if record {
            history.record(&password);
        }

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "password": password,
                    "report": report,
                })
            );
        } else {
            println!("Generated Password: {}", password);
            print_report(&report);
        }
    }

    Ok(())
}

pub fn handle_check(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let report = check_password_strength(password);

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

pub fn handle_history(
    history: &History<FileHistoryStore>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = history.entries();

    if json {
        println!("{}", serde_json::to_string(&entries)?);
    } else if entries.is_empty() {
        println!("No history yet.");
    } else {
        println!("Password History:");
        for (i, password) in entries.iter().enumerate() {
            println!("{}. {}", i + 1, password);
        }
    }

    Ok(())
}

pub fn handle_clear_history(history: &History<FileHistoryStore>) -> Result<(), Box<dyn Error>> {
    history.clear();
    println!("✅ Password history cleared");
    Ok(())
}

pub fn print_report(report: &StrengthReport) {
    println!("Strength: {}/100 ({})", report.score, report.assessment);
    for line in &report.feedback {
        println!("• {}", line);
    }
}
