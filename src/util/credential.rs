//! Random initial passwords for newly provisioned accounts.
//!
//! Every generated credential holds at least one uppercase letter, one
//! lowercase letter, one digit and one symbol, so it always clears the
//! backend's password validators (minimum length, not numeric-only).

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 8;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Why a credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Le mot de passe généré est invalide (min 8 caractères et ne peut pas être uniquement numérique).")]
    TooShort,
    #[error("Le mot de passe généré est invalide (min 8 caractères et ne peut pas être uniquement numérique).")]
    NumericOnly,
}

/// Generate a credential of `length` characters (at least [`MIN_LENGTH`]).
#[must_use]
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::rng(), length)
}

/// Generate a credential from the given random source.
///
/// Lengths below [`MIN_LENGTH`] are raised to it, which keeps the retry
/// loop finite: a seeded candidate can never fail [`check`].
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    let length = length.max(MIN_LENGTH);
    loop {
        let candidate = build_candidate(rng, length);
        if check(&candidate).is_ok() {
            return candidate;
        }
    }
}

/// Validate a credential before it is sent for account creation.
///
/// # Errors
///
/// Returns [`CredentialError::TooShort`] under [`MIN_LENGTH`] characters and
/// [`CredentialError::NumericOnly`] when every character is a digit.
pub fn check(candidate: &str) -> Result<(), CredentialError> {
    if candidate.chars().count() < MIN_LENGTH {
        return Err(CredentialError::TooShort);
    }
    if candidate.chars().all(|c| c.is_ascii_digit()) {
        return Err(CredentialError::NumericOnly);
    }
    Ok(())
}

fn build_candidate<R: Rng>(rng: &mut R, length: usize) -> String {
    let mut chars = Vec::with_capacity(length);
    for class in [UPPER, LOWER, DIGITS, SYMBOLS] {
        chars.push(pick(rng, class));
    }
    let combined = [UPPER, LOWER, DIGITS, SYMBOLS].concat();
    while chars.len() < length {
        chars.push(pick(rng, &combined));
    }
    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

fn pick<R: Rng>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.random_range(0..alphabet.len())]
}
