//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module derives per-field encryption keys from a passphrase and a
//! random salt. The iteration count is deliberately high so that offline
//! brute-force attacks against stolen ciphertext stay expensive.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// PBKDF2 iteration count.
///
/// High enough to make each guess costly for an attacker while keeping a
/// single field operation in the tens of milliseconds on commodity hardware.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-field salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256-GCM).
pub const KEY_LENGTH: usize = 32;

/// A cryptographic key derived from a passphrase.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase using PBKDF2-HMAC-SHA256.
///
/// # Security
///
/// - Same passphrase + salt always produces the same key (deterministic;
///   decryption depends on this)
/// - Different salt produces a different key, so the salt must travel with
///   the ciphertext it protects
/// - There is no failure mode at this layer: a wrong passphrase simply
///   yields a key that fails AEAD authentication downstream
///
/// # Examples
///
/// ```
/// use veil_core::crypto::{derive_key, generate_salt};
///
/// let salt = generate_salt();
/// let key = derive_key("my-passphrase", &salt);
/// // Use key for a single encryption operation...
/// ```
pub fn derive_key(passphrase: &str, salt: &[u8; SALT_LENGTH]) -> DerivedKey {
    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        passphrase.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
        &mut key_bytes,
    );
    DerivedKey::from_bytes(key_bytes)
}

/// Generate a fresh random salt from OS entropy.
///
/// Must be called once per encryption operation; salts are never reused.
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    OsRng.fill_bytes(&mut salt);
    salt
}
