//! Secure password generation.
//!
//! Characters are drawn independently and uniformly from the alphabet
//! using the OS CSPRNG — never a seeded general-purpose generator.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Letters and digits, always part of the alphabet.
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// The fixed symbol set added when symbols are enabled.
pub const SYMBOLS: &str = "!@#$%^&*";

/// Generate a password of `length` characters.
///
/// `length == 0` returns the empty string by contract, not an error.
pub fn generate(length: usize, include_symbols: bool) -> String {
    let mut alphabet: Vec<char> = ALPHANUMERIC.chars().collect();
    if include_symbols {
        alphabet.extend(SYMBOLS.chars());
    }

    // OsRng is fallible in rand 0.9; a broken OS entropy source is
    // unrecoverable, so panicking via unwrap_err is the right shape.
    let mut rng = OsRng.unwrap_err();

    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
