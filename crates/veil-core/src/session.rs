//! In-memory passphrase session.
//!
//! The session is the engine's single piece of shared mutable state: the
//! current passphrase, held only in memory for the duration of a signed-in
//! session and never persisted. It is constructed by the host and injected
//! (`Arc<PassphraseSession>`) into every component that needs it; there is
//! no hidden static or global singleton.
//!
//! ## Lifecycle
//!
//! The session is **Inactive** until [`set`](PassphraseSession::set) is
//! called (login-time setup or the settings toggle), then **Active** until
//! [`clear`](PassphraseSession::clear) (sign-out, or encryption being
//! disabled). Calling `set` while active simply replaces the passphrase;
//! it does not re-encrypt anything already stored, so old fields keep
//! requiring the passphrase they were written under.
//!
//! In-flight encrypt/decrypt operations work on the snapshot they captured
//! via [`current`](PassphraseSession::current); a `set` or `clear` only
//! affects operations that read the session afterwards. A rotation in the
//! middle of a large batch may therefore yield a mix of outcomes, which
//! callers must tolerate.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use secrecy::{ExposeSecret, SecretString};

/// Holds the signed-in user's passphrase for the current session.
#[derive(Default)]
pub struct PassphraseSession {
    passphrase: RwLock<Option<SecretString>>,
}

impl PassphraseSession {
    /// Create a new session in the Inactive state.
    pub fn new() -> Self {
        Self::default()
    }

    // The lock only ever guards a copy of the passphrase, so a poisoned
    // lock still holds valid data; recover instead of propagating.
    fn read_guard(&self) -> RwLockReadGuard<'_, Option<SecretString>> {
        self.passphrase
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<SecretString>> {
        self.passphrase
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Activate the session with a passphrase, replacing any previous one.
    ///
    /// Replacement does not touch existing ciphertext: fields written under
    /// the previous passphrase will fail authentication until it is restored.
    pub fn set(&self, passphrase: &str) {
        *self.write_guard() = Some(SecretString::from(passphrase.to_string()));
    }

    /// Deactivate the session, dropping the passphrase from memory.
    pub fn clear(&self) {
        *self.write_guard() = None;
    }

    /// Whether a passphrase is currently held.
    pub fn is_active(&self) -> bool {
        self.read_guard().is_some()
    }

    /// Snapshot of the current passphrase, if any.
    ///
    /// The returned copy is stable for the duration of one encrypt/decrypt
    /// operation regardless of concurrent `set`/`clear` calls.
    pub fn current(&self) -> Option<SecretString> {
        self.read_guard()
            .as_ref()
            .map(|p| SecretString::from(p.expose_secret().to_string()))
    }
}
