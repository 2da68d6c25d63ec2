//! The field codec: seals and opens single fields.
//!
//! Pure with respect to its inputs (no storage, no network); the only
//! state it touches is a read-only snapshot of the passphrase session
//! taken once per call. Both directions are CPU-bound (one PBKDF2 run per
//! field); hosts that must not block an event loop should go through the
//! record layer, which routes these calls onto a blocking pool.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::crypto::{aead, key};
use crate::error::{Result, VeilError};
use crate::field::types::{DecryptionOutcome, EncryptedField};
use crate::session::PassphraseSession;

/// Encrypts and decrypts individual fields against the passphrase session.
pub struct FieldCodec {
    session: Arc<PassphraseSession>,
}

impl FieldCodec {
    pub fn new(session: Arc<PassphraseSession>) -> Self {
        Self { session }
    }

    /// Encrypt one field's plaintext, if a passphrase is active.
    ///
    /// Encryption is opportunistic, never forced: with no active passphrase
    /// this returns `None` and the caller writes the field as plaintext.
    /// Every call generates a fresh salt and nonce and derives its own key;
    /// two fields sealed in the same write share nothing.
    pub fn encrypt_field(&self, plaintext: &str) -> Option<EncryptedField> {
        let passphrase = self.session.current()?;

        let salt = key::generate_salt();
        let nonce = aead::generate_nonce();
        let derived = key::derive_key(passphrase.expose_secret(), &salt);

        match aead::encrypt(&derived, &nonce, plaintext.as_bytes()) {
            Ok(ciphertext) => Some(EncryptedField::encrypted(
                BASE64.encode(ciphertext),
                BASE64.encode(nonce),
                BASE64.encode(salt),
            )),
            Err(err) => {
                debug!("field encryption failed, leaving plaintext: {}", err);
                None
            }
        }
    }

    /// Decrypt one field.
    ///
    /// - `is_encrypted: false` fields pass through unchanged, whatever the
    ///   session state
    /// - encrypted fields with no active passphrase return
    ///   [`DecryptionOutcome::Locked`]: the data is intact, the key is
    ///   simply unavailable
    /// - authentication failures (wrong passphrase, corruption, tampering)
    ///   and malformed stored material return
    ///   [`DecryptionOutcome::WrongKeyOrCorrupted`]
    pub fn decrypt_field(&self, field: &EncryptedField) -> DecryptionOutcome {
        if !field.is_encrypted {
            return DecryptionOutcome::Plaintext(field.value.clone());
        }

        let Some(passphrase) = self.session.current() else {
            return DecryptionOutcome::Locked;
        };

        match open_field(field, passphrase.expose_secret()) {
            Ok(plaintext) => DecryptionOutcome::Plaintext(plaintext),
            Err(err) => {
                debug!("field decryption failed: {}", err);
                DecryptionOutcome::WrongKeyOrCorrupted
            }
        }
    }
}

fn open_field(field: &EncryptedField, passphrase: &str) -> Result<String> {
    let salt = decode_fixed::<{ key::SALT_LENGTH }>(field.salt.as_deref(), "salt")?;
    let nonce = decode_fixed::<{ aead::NONCE_LENGTH }>(field.nonce.as_deref(), "nonce")?;
    let ciphertext = BASE64
        .decode(&field.value)
        .map_err(|e| VeilError::Encoding(format!("ciphertext is not valid base64: {}", e)))?;

    let derived = key::derive_key(passphrase, &salt);
    let plaintext = aead::decrypt(&derived, &nonce, &ciphertext)?;

    String::from_utf8(plaintext)
        .map_err(|_| VeilError::Encoding("decrypted payload is not valid UTF-8".to_string()))
}

fn decode_fixed<const N: usize>(encoded: Option<&str>, what: &str) -> Result<[u8; N]> {
    let encoded = encoded.ok_or_else(|| VeilError::Encoding(format!("{} is missing", what)))?;
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| VeilError::Encoding(format!("{} is not valid base64: {}", what, e)))?;
    bytes
        .try_into()
        .map_err(|_| VeilError::Encoding(format!("{} has the wrong length", what)))
}
