//! Read-through, TTL-bounded cache over batched metadata lookups.
//!
//! [`MediaMetadataCache`] resolves a list of watchlist entries into
//! [`MetadataRecord`]s. A fresh snapshot is served as-is; otherwise every
//! entry is looked up concurrently, failures are dropped, and the surviving
//! records replace the snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! let cache = MediaMetadataCache::new(lookup, Arc::new(MemoryStore::new()), CacheSettings::default());
//! let records = cache.resolve_all(&config.watchlist, true).await?;
//! ```

pub mod snapshot;
pub mod store;

use std::sync::Arc;

use chrono::Duration;
use futures::future::join_all;
use tracing::{debug, info, warn};
use watchlist_common::{Entry, Error, MetadataRecord, Result};

use crate::config::CacheConfig;
use crate::metadata::MetadataLookup;

pub use snapshot::CacheSnapshot;
pub use store::{MemoryStore, SessionFileStore, SnapshotStore, SESSION_KEY};

/// Default snapshot lifetime in seconds.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Tunables for [`MediaMetadataCache`].
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    /// Lifetime of a snapshot.
    pub ttl: Duration,
    /// Whether a batch in which every lookup failed is still stored.
    ///
    /// When `true`, a total outage is cached as an empty result for the rest
    /// of the TTL. When `false`, such a batch leaves the store untouched.
    pub cache_empty_batches: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
            cache_empty_batches: true,
        }
    }
}

impl From<&CacheConfig> for CacheSettings {
    fn from(config: &CacheConfig) -> Self {
        let ttl_secs = i64::try_from(config.ttl_secs).unwrap_or(i64::MAX);
        Self {
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
            cache_empty_batches: config.cache_empty_batches,
        }
    }
}

/// Result of looking up a single entry.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(MetadataRecord),
    Failed(LookupFailure),
}

/// An entry that could not be resolved, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupFailure {
    pub entry: Entry,
    pub reason: String,
}

/// Where a [`Resolution`]'s records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Served from a fresh snapshot; no lookups were made.
    Cache,
    /// Fetched from the lookup backend.
    Lookup,
}

/// Records produced by [`MediaMetadataCache::resolve`], plus diagnostics.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Successful records in input order (or cached order on a hit).
    pub records: Vec<MetadataRecord>,
    /// Entries whose lookup failed. Always empty on a cache hit.
    pub failures: Vec<LookupFailure>,
    pub source: ResolutionSource,
}

/// Session-scoped read-through cache for watchlist metadata.
///
/// The snapshot lives in the injected [`SnapshotStore`]; two caches sharing a
/// store share a snapshot. Concurrent refreshes are last-write-wins.
pub struct MediaMetadataCache {
    lookup: Arc<dyn MetadataLookup>,
    store: Arc<dyn SnapshotStore>,
    settings: CacheSettings,
}

impl MediaMetadataCache {
    pub fn new(
        lookup: Arc<dyn MetadataLookup>,
        store: Arc<dyn SnapshotStore>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            lookup,
            store,
            settings,
        }
    }

    /// Resolve `entries` to records, serving a fresh snapshot when
    /// `allow_cache` is set.
    ///
    /// Individual lookup failures are logged and dropped; the worst case is
    /// an empty list. The only error is [`Error::MissingCredential`], returned
    /// before any request when a refresh is needed and the backend has no
    /// credential. A fresh snapshot is served even without one.
    pub async fn resolve_all(
        &self,
        entries: &[Entry],
        allow_cache: bool,
    ) -> Result<Vec<MetadataRecord>> {
        Ok(self.resolve(entries, allow_cache).await?.records)
    }

    /// Like [`resolve_all`](Self::resolve_all) but keeps failure reasons and
    /// reports whether the cache was used.
    pub async fn resolve(&self, entries: &[Entry], allow_cache: bool) -> Result<Resolution> {
        if allow_cache {
            if let Some(snapshot) = self.store.load() {
                if snapshot.is_fresh(self.settings.ttl) {
                    debug!(
                        records = snapshot.records.len(),
                        captured_at = %snapshot.captured_at,
                        "Serving watchlist from cache"
                    );
                    return Ok(Resolution {
                        records: snapshot.records,
                        failures: Vec::new(),
                        source: ResolutionSource::Cache,
                    });
                }
                debug!(captured_at = %snapshot.captured_at, "Watchlist snapshot is stale");
            }
        }

        if !self.lookup.is_available() {
            return Err(Error::missing_credential(format!(
                "{} lookup is not configured",
                self.lookup.name()
            )));
        }

        Ok(self.refresh(entries).await)
    }

    /// Drop the current snapshot so the next resolve fetches.
    pub fn invalidate(&self) {
        debug!("Invalidating watchlist snapshot");
        self.store.clear();
    }

    /// Whether the lookup backend's credential is present.
    pub fn is_backing_service_configured(&self) -> bool {
        self.lookup.is_available()
    }

    /// Fan out one lookup per entry, join them all, store the successes.
    async fn refresh(&self, entries: &[Entry]) -> Resolution {
        info!(
            entries = entries.len(),
            provider = self.lookup.name(),
            "Refreshing watchlist metadata"
        );

        let outcomes = join_all(entries.iter().map(|entry| self.lookup_one(entry))).await;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                LookupOutcome::Found(record) => records.push(record),
                LookupOutcome::Failed(failure) => failures.push(failure),
            }
        }

        let all_failed = records.is_empty() && !entries.is_empty();
        if all_failed && !self.settings.cache_empty_batches {
            warn!(
                entries = entries.len(),
                "Every watchlist lookup failed; not caching the empty result"
            );
        } else {
            self.store.save(&CacheSnapshot::capture(records.clone()));
        }

        info!(
            resolved = records.len(),
            failed = failures.len(),
            "Watchlist refresh complete"
        );

        Resolution {
            records,
            failures,
            source: ResolutionSource::Lookup,
        }
    }

    async fn lookup_one(&self, entry: &Entry) -> LookupOutcome {
        match self.lookup.lookup(entry).await {
            Ok(mut record) => {
                record.category = entry.tag;
                LookupOutcome::Found(record)
            }
            Err(e) => {
                warn!(
                    entry = %entry,
                    provider = self.lookup.name(),
                    error = %format!("{e:#}"),
                    "Watchlist lookup failed"
                );
                LookupOutcome::Failed(LookupFailure {
                    entry: *entry,
                    reason: format!("{e:#}"),
                })
            }
        }
    }
}
