//! # Veil Core
//!
//! Core library for Veil: client-side field-level encryption for personal
//! records (notes, tasks, events, projects, goals).
//!
//! This crate is the encryption engine only, independent of any UI or
//! storage backend: write paths hand it plaintext fields and persist the
//! sealed result; fetch paths hand it stored fields and render the
//! readable views it returns. Everything it needs from the host is the
//! injected [`PassphraseSession`].
//!
//! ## Architecture
//!
//! - **crypto**: key derivation (PBKDF2-HMAC-SHA256), AES-256-GCM AEAD,
//!   passphrase generation and validation
//! - **session**: the in-memory passphrase lifecycle for a signed-in session
//! - **field**: per-field encryption state and the encrypt/decrypt codec
//! - **records**: applying the codec across records and collections
//!
//! ## Security model
//!
//! - The passphrase lives only in memory and is never persisted
//! - Every field is sealed under a fresh salt and nonce; keys are
//!   re-derived per operation and zeroized after use
//! - Decryption fails closed; an unreadable field renders a placeholder
//!   instead of aborting its siblings
//! - A lost passphrase is unrecoverable data loss by design

pub mod crypto;
pub mod error;
pub mod field;
pub mod records;
pub mod session;

pub use error::{Result, VeilError};
pub use field::{DecryptionOutcome, EncryptedField, FieldCodec};
pub use records::{Record, RecordEncryptor, RecordKind, CANNOT_DECRYPT_PLACEHOLDER};
pub use session::PassphraseSession;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
