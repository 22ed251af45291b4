//! BIP-39 phrase generation and parsing.
//!
//! The 24-word phrase is the wallet's single source of truth: once
//! persisted, keys and addresses must always be rebuilt from it, never
//! regenerated.

use bip39::{Language, Mnemonic};

use crate::error::WalletError;

/// Number of words in a generated phrase (32 bytes of entropy).
pub const PHRASE_WORDS: usize = 24;

/// Generate a new 24-word phrase from the OS cryptographic RNG.
pub fn generate_phrase() -> String {
    use rand::RngCore;
    let mut entropy = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let m = Mnemonic::from_entropy_in(Language::English, &entropy)
        .expect("32 bytes always produces a valid mnemonic");
    m.to_string()
}

/// Parse a phrase into a validated [`Mnemonic`].
///
/// Normalizes whitespace and converts to lowercase before parsing,
/// then enforces the 24-word count on top of the checksum validation.
pub fn parse_phrase(phrase: &str) -> Result<Mnemonic, WalletError> {
    let normalized = phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let m = Mnemonic::parse_in(Language::English, &normalized)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    if m.word_count() != PHRASE_WORDS {
        return Err(WalletError::InvalidMnemonic(format!(
            "expected {PHRASE_WORDS} words, got {}",
            m.word_count()
        )));
    }
    Ok(m)
}

/// Extract 32 bytes of signing-key material from a parsed phrase.
///
/// Takes the first half of the 64-byte BIP-39 seed (empty passphrase).
pub fn phrase_to_key_material(m: &Mnemonic) -> [u8; 32] {
    let seed = zeroize::Zeroizing::new(m.to_seed(""));
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&seed[..32]);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A freshly generated phrase must have exactly 24 words and parse back.
    #[test]
    fn generated_phrase_is_24_words() {
        let phrase = generate_phrase();
        let word_count = phrase.split_whitespace().count();
        assert_eq!(word_count, PHRASE_WORDS, "got {word_count}: {phrase}");
        parse_phrase(&phrase).expect("generated phrase should parse");
    }

    /// Two generated phrases must differ.
    #[test]
    fn generated_phrases_unique() {
        assert_ne!(generate_phrase(), generate_phrase());
    }

    /// Parsing the same phrase twice yields identical key material.
    #[test]
    fn key_material_deterministic() {
        let phrase = generate_phrase();
        let m1 = parse_phrase(&phrase).unwrap();
        let m2 = parse_phrase(&phrase).unwrap();
        assert_eq!(phrase_to_key_material(&m1), phrase_to_key_material(&m2));
    }

    /// A phrase containing an invalid BIP-39 word must be rejected.
    #[test]
    fn invalid_word_rejected() {
        let result = parse_phrase("abandon abandon abandon invalidword");
        assert!(result.is_err(), "expected error for invalid word");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("invalid mnemonic"), "error message was: {err_msg}");
    }

    /// Valid words but wrong checksum must be rejected.
    #[test]
    fn bad_checksum_rejected() {
        let words = vec!["abandon"; 23];
        let mut phrase = words.join(" ");
        phrase.push_str(" zoo");
        let result = parse_phrase(&phrase);
        assert!(result.is_err(), "expected checksum error for: {phrase}");
    }

    /// A valid 12-word phrase is rejected for being too short.
    #[test]
    fn short_phrase_rejected() {
        // 12 valid words with correct checksum
        let phrase = "abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon about";
        let result = parse_phrase(phrase);
        assert!(result.is_err(), "expected rejection of 12-word phrase");
    }

    /// Extra spaces and tabs must be normalized away.
    #[test]
    fn whitespace_normalization() {
        let clean = generate_phrase();
        let messy = clean.split_whitespace().collect::<Vec<_>>().join("  \t ");
        let m1 = parse_phrase(&clean).unwrap();
        let m2 = parse_phrase(&messy).unwrap();
        assert_eq!(phrase_to_key_material(&m1), phrase_to_key_material(&m2));
    }
}
