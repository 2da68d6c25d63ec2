//! Record-level encryption orchestration.
//!
//! This module applies the field codec across the named fields of
//! heterogeneous record types and across fetched collections:
//! - write paths seal named fields independently, tolerating partial
//!   success
//! - fetch paths open every field concurrently with per-field failure
//!   isolation, preserving collection order
//! - the encryption toggle is explicit about what it does and does not
//!   touch retroactively

pub mod orchestrator;
pub mod types;

pub use orchestrator::{RecordEncryptor, CANNOT_DECRYPT_PLACEHOLDER};
pub use types::{Record, RecordKind};
