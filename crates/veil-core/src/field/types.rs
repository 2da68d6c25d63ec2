//! Persisted field types.
//!
//! These types define the storage shape the engine hands to (and accepts
//! from) the storage collaborator: four sibling attributes per encryptable
//! field. They are plain values; all cryptography lives in the codec.

use serde::{Deserialize, Serialize};

/// The persisted representation of one encryptable text field.
///
/// When `is_encrypted` is true, `value` holds the base64-encoded AEAD
/// output (ciphertext with the authentication tag appended) and `nonce`
/// and `salt` hold the base64-encoded material needed to open it. When
/// false, `value` is the plaintext as written and the metadata is absent,
/// the shape of a record written while encryption was off.
///
/// A persisted field is immutable: an edit produces a brand-new
/// `EncryptedField` with fresh salt and nonce, never an in-place rewrite
/// of ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedField {
    /// Base64 ciphertext when encrypted, plaintext otherwise
    pub value: String,

    /// Base64 96-bit nonce; present only when encrypted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    /// Base64 128-bit key-derivation salt; present only when encrypted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    /// Whether `value` holds ciphertext
    pub is_encrypted: bool,
}

impl EncryptedField {
    /// A plaintext-at-rest field (encryption off or declined at write time).
    pub fn plaintext(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            nonce: None,
            salt: None,
            is_encrypted: false,
        }
    }

    pub(crate) fn encrypted(value: String, nonce: String, salt: String) -> Self {
        Self {
            value,
            nonce: Some(nonce),
            salt: Some(salt),
            is_encrypted: true,
        }
    }
}

/// Outcome of decrypting one field.
///
/// The three cases are deliberately distinct: `Locked` means the data is
/// fine and only the passphrase is missing, while `WrongKeyOrCorrupted`
/// means authentication failed and the stored bytes cannot be read with
/// the current passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptionOutcome {
    /// Readable text: decrypted plaintext, or a plaintext-at-rest pass-through
    Plaintext(String),

    /// The field is encrypted but no passphrase is active
    Locked,

    /// AEAD authentication failed: wrong passphrase, corruption, or tampering
    WrongKeyOrCorrupted,
}
