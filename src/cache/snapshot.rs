//! Point-in-time copy of a resolved watchlist.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use watchlist_common::MetadataRecord;

/// Records captured by one refresh, stamped with the capture time.
///
/// A snapshot is replaced wholesale on every refresh and never edited in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub records: Vec<MetadataRecord>,
    pub captured_at: DateTime<Utc>,
}

impl CacheSnapshot {
    /// Snapshot of `records` captured now.
    pub fn capture(records: Vec<MetadataRecord>) -> Self {
        Self::captured_at(records, Utc::now())
    }

    /// Snapshot of `records` with an explicit capture time.
    pub fn captured_at(records: Vec<MetadataRecord>, captured_at: DateTime<Utc>) -> Self {
        Self {
            records,
            captured_at,
        }
    }

    /// Whether the snapshot may still be served at `now`.
    ///
    /// Fresh means strictly younger than `ttl`. A capture time in the future
    /// (clock moved backwards) counts as fresh.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.captured_at) < ttl
    }

    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.is_fresh_at(Utc::now(), ttl)
    }
}
