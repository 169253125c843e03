//! Trait definition for metadata lookup backends.
//!
//! A [`MetadataLookup`] resolves a single watchlist [`Entry`] into a
//! [`MetadataRecord`]. Implementations only know how to talk to their
//! service; batching, caching and failure isolation live in
//! [`crate::cache`].

use async_trait::async_trait;
use watchlist_common::{Entry, MetadataRecord};

/// Async trait that all metadata lookup backends must implement.
///
/// Backends are shared behind an `Arc` and called concurrently, once per
/// entry, so `lookup` must not rely on exclusive access.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Short, lowercase identifier for this backend (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the backend's credential is present.
    ///
    /// This is a pure read of process configuration and performs no I/O.
    fn is_available(&self) -> bool;

    /// Fetch metadata for one entry.
    ///
    /// The returned record's `category` must be the entry's tag: the service
    /// has no notion of watchlist collections.
    async fn lookup(&self, entry: &Entry) -> anyhow::Result<MetadataRecord>;
}
