//! Cryptographic operations for Veil.
//!
//! This module provides the primitives the field layer is built on:
//! - **PBKDF2-HMAC-SHA256**: deliberately slow, salted key derivation
//! - **AES-256-GCM**: authenticated encryption with a 96-bit nonce
//! - Passphrase generation and strength validation
//!
//! ## Security Model
//!
//! - Keys are derived per operation from the session passphrase and a
//!   per-field random salt; nothing caches a derived key beyond one call
//! - Every encryption uses a fresh random salt and nonce
//! - Key material is zeroized from memory on drop
//! - No plaintext passphrases are ever persisted
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the stored ciphertext (server compromise, database dumps)
//! - Offline brute-force attacks on the passphrase
//! - Tampering with stored ciphertext (fails closed on authentication)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Access to an unlocked session / memory

pub mod aead;
pub mod key;
pub mod passphrase;

pub use key::{derive_key, generate_salt, DerivedKey};
pub use passphrase::{generate_passphrase, validate_passphrase};
