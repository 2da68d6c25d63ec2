//! Core record types.
//!
//! Records are the unit the surrounding application reads and writes:
//! notes, tasks, events, projects, and goals. Each record owns a mapping
//! from field name to its own independently encrypted field; encrypting
//! one field never implies anything about its siblings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::EncryptedField;

/// The record families that carry encryptable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Note,
    Task,
    Event,
    Project,
    Goal,
}

impl RecordKind {
    /// The field names this kind encrypts by default.
    ///
    /// Notes encrypt their body; tasks and events their description;
    /// projects and goals both title and description. Callers may pass a
    /// different selection to the record encryptor; the storage shape
    /// reserves encryption metadata for every text field.
    pub fn encryptable_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Note => &["content"],
            RecordKind::Task | RecordKind::Event => &["description"],
            RecordKind::Project | RecordKind::Goal => &["title", "description"],
        }
    }
}

/// An application record with field-level encryption state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Which record family this belongs to
    pub kind: RecordKind,

    /// Encryptable text fields, keyed by field name. Each entry carries
    /// its own value, nonce, salt, and `is_encrypted` flag.
    pub fields: BTreeMap<String, EncryptedField>,

    /// Non-encryptable attributes (tags, colors, completion flags, links,
    /// ...). The engine never reads or writes into this payload.
    #[serde(default)]
    pub data: serde_json::Value,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(kind: RecordKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            fields: BTreeMap::new(),
            data: serde_json::Value::Null,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a field to plaintext, as a write path does before encryption.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), EncryptedField::plaintext(value));
        self
    }

    /// Attach non-encryptable attributes.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&EncryptedField> {
        self.fields.get(name)
    }
}
