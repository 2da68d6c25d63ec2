//! Field-level encryption.
//!
//! Each encryptable text field of a record carries its own independent
//! encryption state: value, nonce, salt, and an `is_encrypted` flag. The
//! [`FieldCodec`] seals and opens single fields against the injected
//! passphrase session; the record layer applies it across whole records
//! and collections.

pub mod codec;
pub mod types;

pub use codec::FieldCodec;
pub use types::{DecryptionOutcome, EncryptedField};
