//! Passphrase generation and strength validation.
//!
//! Generated passphrases are several random dictionary words plus two
//! random numbers, drawn from OS entropy: high-entropy but still typeable
//! and memorable. Validation trusts that structure; hand-picked passphrases
//! get stricter character-class checks instead.

use rand::rngs::OsRng;
use rand::Rng;

use crate::error::{Result, VeilError};

/// Minimum passphrase length in characters.
const MIN_PASSPHRASE_LENGTH: usize = 12;

/// Generated-style passphrases are recognized by structure: hyphen-joined
/// words of at least this total length.
const GENERATED_STYLE_MIN_LENGTH: usize = 15;

/// Number of words drawn into a generated passphrase.
const WORD_COUNT: usize = 4;

/// Word list for generated passphrases.
const WORD_LIST: &[&str] = &[
    "Apple",
    "Bridge",
    "Castle",
    "Dragon",
    "Eagle",
    "Forest",
    "Garden",
    "Harbor",
    "Island",
    "Jungle",
    "Knight",
    "Lighthouse",
    "Mountain",
    "Ocean",
    "Palace",
    "Quest",
    "River",
    "Sunset",
    "Tower",
    "Universe",
    "Valley",
    "Waterfall",
    "Xenon",
    "Yacht",
    "Zenith",
];

/// Generate a high-entropy, human-typeable passphrase.
///
/// Four random words joined with hyphens, followed by two random numbers
/// in `0..100`, e.g. `Apple-Bridge-Castle-Dragon-12-34`. All randomness
/// comes from the OS CSPRNG.
pub fn generate_passphrase() -> String {
    let mut rng = OsRng;

    let mut parts: Vec<String> = (0..WORD_COUNT)
        .map(|_| WORD_LIST[rng.gen_range(0..WORD_LIST.len())].to_string())
        .collect();

    parts.push(rng.gen_range(0..100u32).to_string());
    parts.push(rng.gen_range(0..100u32).to_string());

    parts.join("-")
}

/// Validate passphrase meets minimum security requirements.
///
/// # Requirements
///
/// - At least 12 characters long
/// - Generated-style passphrases (hyphen-joined, at least 15 characters)
///   are accepted on structure alone; their entropy comes from the word
///   draw, not from character classes
/// - Custom passphrases must additionally contain lowercase, uppercase,
///   and digit characters
///
/// # Returns
///
/// Returns `Ok(())` if valid, or `VeilError::InvalidInput` with the reason.
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.len() < MIN_PASSPHRASE_LENGTH {
        return Err(VeilError::InvalidInput(format!(
            "Passphrase must be at least {} characters (got {})",
            MIN_PASSPHRASE_LENGTH,
            passphrase.len()
        )));
    }

    if is_generated_style(passphrase) {
        return Ok(());
    }

    if !passphrase.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(VeilError::InvalidInput(
            "Passphrase must contain lowercase letters".to_string(),
        ));
    }

    if !passphrase.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(VeilError::InvalidInput(
            "Passphrase must contain uppercase letters".to_string(),
        ));
    }

    if !passphrase.chars().any(|c| c.is_ascii_digit()) {
        return Err(VeilError::InvalidInput(
            "Passphrase must contain numbers".to_string(),
        ));
    }

    Ok(())
}

fn is_generated_style(passphrase: &str) -> bool {
    passphrase.contains('-') && passphrase.len() >= GENERATED_STYLE_MIN_LENGTH
}
