// src/scoring/mod.rs
use std::collections::HashSet;

use crate::models::{Assessment, StrengthReport};

/// Score a password against the strength heuristic.
///
/// Three additive components: length (5/15/20), character-class variety
/// (10 per class present) and a uniqueness bonus (15 when more than 70% of
/// the characters are distinct). The final score is capped at 100.
pub fn check_password_strength(password: &str) -> StrengthReport {
    let mut score: u32 = 0;
    let mut feedback = Vec::new();

    let length = password.chars().count();
    if length >= 12 {
        score += 20;
        feedback.push("Excellent length".to_string());
    } else if length >= 8 {
        score += 15;
        feedback.push("Good length".to_string());
    } else {
        score += 5;
        feedback.push("Too short".to_string());
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());

    let char_types = [has_lowercase, has_uppercase, has_digit, has_symbol]
        .iter()
        .filter(|present| **present)
        .count();

    score += char_types as u32 * 10;
    feedback.push(format!("{} character types used", char_types));

    // Distinct characters over total length, 0 for the empty string
    let unique_ratio = if length == 0 {
        0.0
    } else {
        password.chars().collect::<HashSet<_>>().len() as f64 / length as f64
    };

    if unique_ratio > 0.7 {
        score += 15;
    } else {
        feedback.push("Try more unique characters".to_string());
    }

    let score = score.min(100) as u8;

    StrengthReport {
        score,
        assessment: Assessment::from_score(score),
        feedback,
    }
}
