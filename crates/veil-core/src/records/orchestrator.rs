//! Applying the field codec across records and collections.
//!
//! The record encryptor is the surface the application's write and fetch
//! paths talk to. It seals the named fields of a record at write time and
//! opens every field of a fetched collection concurrently, isolating
//! per-field failures so one unreadable field never takes a sibling down
//! with it.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::task;
use tracing::{debug, info};

use crate::field::{DecryptionOutcome, FieldCodec};
use crate::records::types::Record;
use crate::session::PassphraseSession;

/// Visible placeholder rendered for a field whose ciphertext failed
/// authentication under the current passphrase.
pub const CANNOT_DECRYPT_PLACEHOLDER: &str = "[Encrypted - Cannot decrypt]";

/// Encrypts and decrypts whole records against the passphrase session.
pub struct RecordEncryptor {
    codec: Arc<FieldCodec>,
    session: Arc<PassphraseSession>,
}

impl RecordEncryptor {
    pub fn new(session: Arc<PassphraseSession>) -> Self {
        Self {
            codec: Arc::new(FieldCodec::new(Arc::clone(&session))),
            session,
        }
    }

    /// The underlying field codec, for call sites that handle one field.
    pub fn codec(&self) -> &Arc<FieldCodec> {
        &self.codec
    }

    /// Seal the named fields of a record before it is persisted.
    ///
    /// Each named field is sealed independently with its own salt and
    /// nonce. Fields are skipped (left as plaintext with
    /// `is_encrypted: false`) when they are empty, already encrypted, or
    /// when no passphrase is active (encryption is opportunistic). Partial
    /// results are expected: a record with an encrypted body and a
    /// plaintext empty title is a valid outcome, not an error.
    ///
    /// Key derivation runs on the blocking pool; callers on an event loop
    /// are not stalled by PBKDF2.
    pub async fn encrypt_record_fields(&self, record: &Record, field_names: &[&str]) -> Record {
        let mut result = record.clone();

        let sealing: Vec<_> = field_names
            .iter()
            .filter_map(|name| {
                let field = record.field(name)?;
                if field.is_encrypted || field.value.is_empty() {
                    return None;
                }
                let codec = Arc::clone(&self.codec);
                let value = field.value.clone();
                let name = (*name).to_string();
                Some(async move {
                    let sealed = task::spawn_blocking(move || codec.encrypt_field(&value))
                        .await
                        .unwrap_or_else(|err| {
                            debug!("encryption task for field '{}' failed: {}", name, err);
                            None
                        });
                    (name, sealed)
                })
            })
            .collect();

        for (name, sealed) in join_all(sealing).await {
            if let Some(sealed) = sealed {
                result.fields.insert(name, sealed);
            }
        }

        result
    }

    /// Decrypt every field of one fetched record into a display view.
    ///
    /// See [`decrypt_records`](Self::decrypt_records) for the rendering
    /// rules; this is the single-record form used by fetch-one paths.
    pub async fn decrypt_record(&self, record: &Record) -> Record {
        self.decrypt_into_view(record.clone()).await
    }

    /// Decrypt a fetched collection into display views, preserving order.
    ///
    /// Every field of every record is opened concurrently (each operation
    /// reads only its own field and the passphrase snapshot it captured),
    /// but the returned collection keeps the input ordering exactly,
    /// regardless of completion order.
    ///
    /// Per-field rendering:
    /// - a decrypted field gets its plaintext back in `value` (the stored
    ///   encryption metadata is kept, so callers can tell the field was
    ///   encrypted at rest)
    /// - a locked field (no active passphrase) keeps its stored ciphertext
    ///   and flags untouched
    /// - a field that fails authentication renders
    ///   [`CANNOT_DECRYPT_PLACEHOLDER`], scoped to that field only; sibling
    ///   fields and records are never aborted or skipped
    ///
    /// The returned records are views for display. They must not be
    /// written back to storage.
    pub async fn decrypt_records(&self, records: Vec<Record>) -> Vec<Record> {
        join_all(
            records
                .into_iter()
                .map(|record| self.decrypt_into_view(record)),
        )
        .await
    }

    async fn decrypt_into_view(&self, record: Record) -> Record {
        let mut view = record;

        let opening: Vec<_> = view
            .fields
            .iter()
            .map(|(name, field)| {
                let codec = Arc::clone(&self.codec);
                let name = name.clone();
                let field = field.clone();
                async move {
                    let outcome = task::spawn_blocking(move || codec.decrypt_field(&field))
                        .await
                        .unwrap_or_else(|err| {
                            debug!("decryption task for field '{}' failed: {}", name, err);
                            DecryptionOutcome::WrongKeyOrCorrupted
                        });
                    (name, outcome)
                }
            })
            .collect();

        for (name, outcome) in join_all(opening).await {
            match outcome {
                DecryptionOutcome::Plaintext(text) => {
                    if let Some(field) = view.fields.get_mut(&name) {
                        field.value = text;
                    }
                }
                // Data intact, key unavailable; the stored ciphertext and
                // flags stay so the caller can render its own affordance
                DecryptionOutcome::Locked => {}
                DecryptionOutcome::WrongKeyOrCorrupted => {
                    if let Some(field) = view.fields.get_mut(&name) {
                        field.value = CANNOT_DECRYPT_PLACEHOLDER.to_string();
                    }
                }
            }
        }

        view
    }

    /// Turn encryption on or off for subsequent writes.
    ///
    /// This is deliberately asymmetric and not retroactive in either
    /// direction:
    /// - disabling clears the session passphrase but does NOT decrypt
    ///   anything already stored; old ciphertext still requires the
    ///   original passphrase, and only an explicit re-save moves content
    ///   back to plaintext
    /// - enabling does NOT re-encrypt historical records; only writes made
    ///   after a passphrase is set are affected
    pub fn toggle_encryption(&self, enable: bool) {
        if enable {
            info!("encryption enabled; only subsequent writes are affected");
        } else {
            self.session.clear();
            info!("encryption disabled; stored ciphertext is left as written");
        }
    }
}
