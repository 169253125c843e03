//! Session-scoped snapshot storage.
//!
//! The cache owns at most one [`CacheSnapshot`], held by a [`SnapshotStore`].
//! Stores never report errors: a failed read is a miss and a failed write is
//! logged and dropped, so storage trouble degrades to "no cache".

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use watchlist_common::{Error, Result};

use super::snapshot::CacheSnapshot;

/// Fixed key the snapshot is stored under.
pub const SESSION_KEY: &str = "tmdb_watchlist_cache";

/// Holder of the current snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Current snapshot, if one is stored and readable.
    fn load(&self) -> Option<CacheSnapshot>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &CacheSnapshot);

    /// Drop the stored snapshot.
    fn clear(&self);
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Process-local store; the snapshot lives as long as the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RwLock<Option<CacheSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `snapshot`.
    pub fn with_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<CacheSnapshot> {
        self.snapshot.read().clone()
    }

    fn save(&self, snapshot: &CacheSnapshot) {
        *self.snapshot.write() = Some(snapshot.clone());
    }

    fn clear(&self) {
        *self.snapshot.write() = None;
    }
}

// ---------------------------------------------------------------------------
// Session file
// ---------------------------------------------------------------------------

/// JSON file under a session directory, one file per key.
///
/// The directory is expected to be short-lived (a temp directory by
/// default), which is what makes the snapshot session-scoped.
#[derive(Debug, Clone)]
pub struct SessionFileStore {
    path: PathBuf,
}

impl SessionFileStore {
    /// Store for [`SESSION_KEY`] under `session_dir`.
    pub fn new(session_dir: impl AsRef<Path>) -> Self {
        Self::with_key(session_dir, SESSION_KEY)
    }

    pub fn with_key(session_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: session_dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<CacheSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::storage(format!("failed to read snapshot {:?}: {}", self.path, e))
        })?;
        let snapshot: CacheSnapshot = serde_json::from_str(&content).map_err(|e| {
            Error::storage(format!("failed to parse snapshot {:?}: {}", self.path, e))
        })?;
        Ok(Some(snapshot))
    }

    fn write(&self, snapshot: &CacheSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::storage(format!("failed to create session dir {:?}: {}", parent, e))
            })?;
        }

        let json = serde_json::to_string(snapshot)
            .map_err(|e| Error::storage(format!("failed to serialize snapshot: {}", e)))?;

        // Write then rename so a reader never sees half a snapshot
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| Error::storage(format!("failed to write snapshot {:?}: {}", tmp, e)))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            Error::storage(format!("failed to replace snapshot {:?}: {}", self.path, e))
        })?;
        Ok(())
    }
}

impl SnapshotStore for SessionFileStore {
    fn load(&self) -> Option<CacheSnapshot> {
        match self.read() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Ignoring unreadable watchlist snapshot: {}", e);
                None
            }
        }
    }

    fn save(&self, snapshot: &CacheSnapshot) {
        if let Err(e) = self.write(snapshot) {
            tracing::warn!("Failed to persist watchlist snapshot: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to remove watchlist snapshot {:?}: {}", self.path, e);
            }
        }
    }
}
