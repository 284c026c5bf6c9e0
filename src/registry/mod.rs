//! Per-session load registry.
//!
//! Tracks which library versions have been requested for which sessions so
//! that load requests are idempotent. The registry is an explicit object —
//! the host decides its scope (typically one per application) and calls
//! [`LoadRegistry::forget_session`] on session teardown.
//!
//! A record means "injection was requested", not "the browser finished
//! loading": the dispatcher writes the record immediately after issuing the
//! injection instructions, without waiting for the browser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::session::SessionId;

/// Identifies one registry entry: a library within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadKey {
    session: SessionId,
    library: String,
}

impl LoadKey {
    /// Create a key for a (session, library) pair.
    pub fn new(session: SessionId, library: impl Into<String>) -> Self {
        Self {
            session,
            library: library.into(),
        }
    }

    /// The session component of the key.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// The library component of the key.
    pub fn library(&self) -> &str {
        &self.library
    }
}

/// The version recorded for a loaded library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRecord {
    version: String,
}

impl LoadRecord {
    /// Create a record for the given version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// The recorded version string.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Mapping from [`LoadKey`] to [`LoadRecord`].
///
/// A map, not a multimap: at most one record exists per key, and recording
/// the same key again overwrites. Entries are never removed by the
/// dispatcher; session teardown removes them via
/// [`forget_session`](LoadRegistry::forget_session).
#[derive(Debug, Default)]
pub struct LoadRegistry {
    entries: HashMap<LoadKey, LoadRecord>,
}

impl LoadRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for a key.
    pub fn get(&self, key: &LoadKey) -> Option<&LoadRecord> {
        self.entries.get(key)
    }

    /// Record a load, overwriting any previous record for the key.
    pub fn record(&mut self, key: LoadKey, record: LoadRecord) {
        self.entries.insert(key, record);
    }

    /// The version recorded for a library in a session, if any.
    pub fn loaded_version(&self, session: &SessionId, library: &str) -> Option<&str> {
        self.entries
            .get(&LoadKey::new(session.clone(), library))
            .map(LoadRecord::version)
    }

    /// Whether any version of the library has been recorded for the session.
    pub fn is_loaded(&self, session: &SessionId, library: &str) -> bool {
        self.loaded_version(session, library).is_some()
    }

    /// Whether exactly this version of the library has been recorded for
    /// the session.
    pub fn is_loaded_version(&self, session: &SessionId, library: &str, version: &str) -> bool {
        self.loaded_version(session, library) == Some(version)
    }

    /// Drop all records for a session. Call on session teardown.
    pub fn forget_session(&mut self, session: &SessionId) {
        self.entries.retain(|key, _| key.session() != session);
    }

    /// Number of records in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
