//! AES-256-GCM authenticated encryption.
//!
//! Thin wrappers around the `aes-gcm` cipher: seal a byte payload under a
//! derived key and a single-use nonce, and open it again with the
//! authentication tag verified. Decryption fails closed: a wrong key,
//! corrupted ciphertext, or tampering all surface as
//! [`VeilError::AuthenticationFailed`], never as partial plaintext.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::key::DerivedKey;
use crate::error::{Result, VeilError};

/// Fixed nonce length for AES-256-GCM (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// Length of the authentication tag appended to the ciphertext (128 bits).
pub const TAG_LENGTH: usize = 16;

/// Generate a fresh random 96-bit nonce from OS entropy.
///
/// A nonce must never be reused under the same key; callers pair every
/// nonce with a freshly derived key and discard both after one operation.
pub fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt plaintext using AES-256-GCM.
///
/// Returns the ciphertext with the 16-byte authentication tag appended.
/// Encryption does not fail for well-formed input.
pub fn encrypt(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VeilError::Crypto(format!("Invalid key length: {}", e)))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| VeilError::Crypto("AES-GCM encryption failed".to_string()))
}

/// Decrypt ciphertext produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`VeilError::AuthenticationFailed`] if the tag does not verify:
/// wrong key, corrupted ciphertext, or a mismatched nonce.
pub fn decrypt(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LENGTH],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VeilError::Crypto(format!("Invalid key length: {}", e)))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| VeilError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key::{derive_key, generate_salt};

    fn test_key(passphrase: &str) -> DerivedKey {
        derive_key(passphrase, &generate_salt())
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let key = test_key("test-passphrase");
        let nonce = generate_nonce();
        let plaintext = b"Weekly sync with the product team";

        let ciphertext = encrypt(&key, &nonce, plaintext).expect("encryption should succeed");
        assert_ne!(ciphertext.as_slice(), plaintext);

        let decrypted = decrypt(&key, &nonce, &ciphertext).expect("decryption should succeed");
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_tag_appended_to_ciphertext() {
        let key = test_key("test-passphrase");
        let nonce = generate_nonce();
        let plaintext = b"short";

        let ciphertext = encrypt(&key, &nonce, plaintext).expect("encryption should succeed");
        assert_eq!(ciphertext.len(), plaintext.len() + TAG_LENGTH);
    }

    #[test]
    fn test_wrong_key_fails_closed() {
        let key = test_key("correct-passphrase");
        let wrong_key = test_key("wrong-passphrase");
        let nonce = generate_nonce();

        let ciphertext = encrypt(&key, &nonce, b"secret").expect("encryption should succeed");

        let result = decrypt(&wrong_key, &nonce, &ciphertext);
        assert!(matches!(result, Err(VeilError::AuthenticationFailed)));
    }

    #[test]
    fn test_wrong_nonce_fails_closed() {
        let key = test_key("test-passphrase");
        let nonce = generate_nonce();
        let other_nonce = generate_nonce();

        let ciphertext = encrypt(&key, &nonce, b"secret").expect("encryption should succeed");

        let result = decrypt(&key, &other_nonce, &ciphertext);
        assert!(matches!(result, Err(VeilError::AuthenticationFailed)));
    }

    #[test]
    fn test_tampered_ciphertext_fails_closed() {
        let key = test_key("test-passphrase");
        let nonce = generate_nonce();

        let mut ciphertext = encrypt(&key, &nonce, b"secret").expect("encryption should succeed");
        ciphertext[0] ^= 0x01;

        let result = decrypt(&key, &nonce, &ciphertext);
        assert!(matches!(result, Err(VeilError::AuthenticationFailed)));
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let key = test_key("test-passphrase");
        let nonce = generate_nonce();

        let ciphertext = encrypt(&key, &nonce, b"").expect("encryption should succeed");
        let decrypted = decrypt(&key, &nonce, &ciphertext).expect("decryption should succeed");
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_nonces_unique() {
        let a = generate_nonce();
        let b = generate_nonce();
        assert_ne!(a, b);
    }
}
