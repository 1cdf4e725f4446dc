// src/generators/password.rs
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

/// Shortest length that can still contain all four character classes.
pub const MIN_PASSWORD_LENGTH: usize = 4;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length must be at least {MIN_PASSWORD_LENGTH}, got {0}")]
    LengthTooShort(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a random password of exactly `length` characters containing at
/// least one lowercase letter, one uppercase letter, one digit and one
/// punctuation character.
pub fn generate_password(length: usize) -> Result<String> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(GeneratorError::LengthTooShort(length));
    }

    let mut rng = rand::thread_rng();

    // One character from each mandated class up front
    let mut chars: Vec<u8> = vec![
        LOWERCASE[rng.gen_range(0..LOWERCASE.len())],
        UPPERCASE[rng.gen_range(0..UPPERCASE.len())],
        DIGITS[rng.gen_range(0..DIGITS.len())],
        PUNCTUATION[rng.gen_range(0..PUNCTUATION.len())],
    ];

    // Remaining characters come from the full pool
    let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();
    for _ in 0..length - MIN_PASSWORD_LENGTH {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Shuffle so the mandated classes are not pinned to the first four slots
    chars.shuffle(&mut rng);

    Ok(chars.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_all_classes(password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.bytes().any(|b| PUNCTUATION.contains(&b))
    }

    #[test]
    fn generates_requested_length() {
        for length in [4, 5, 16, 64] {
            let password = generate_password(length).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn covers_all_character_classes() {
        for length in [4, 5, 16, 64] {
            for _ in 0..20 {
                let password = generate_password(length).unwrap();
                assert!(has_all_classes(&password), "missing a class in {:?}", password);
            }
        }
    }

    #[test]
    fn rejects_too_short_lengths() {
        for length in 0..MIN_PASSWORD_LENGTH {
            assert_eq!(
                generate_password(length),
                Err(GeneratorError::LengthTooShort(length))
            );
        }
    }

    #[test]
    fn only_draws_from_the_known_pool() {
        let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();
        let password = generate_password(64).unwrap();
        assert!(password.bytes().all(|b| pool.contains(&b)));
    }
}
