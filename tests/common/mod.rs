//! Shared test helpers for integration tests.
//!
//! Provides [`StubLookup`], a scripted [`MetadataLookup`] that counts calls,
//! fails selected ids and can delay responses to shuffle completion order.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use watchlist::cache::{CacheSettings, MediaMetadataCache, MemoryStore, SnapshotStore};
use watchlist::metadata::MetadataLookup;
use watchlist::{Entry, MediaType, MetadataRecord, Tag};

/// Scripted lookup backend.
pub struct StubLookup {
    titles: HashMap<u64, String>,
    failing: HashSet<u64>,
    delays: HashMap<u64, Duration>,
    category: Option<Tag>,
    available: bool,
    calls: AtomicUsize,
}

impl StubLookup {
    /// Every id resolves to `"Title {id}"`.
    pub fn new() -> Self {
        Self {
            titles: HashMap::new(),
            failing: HashSet::new(),
            delays: HashMap::new(),
            category: None,
            available: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_title(mut self, id: u64, title: &str) -> Self {
        self.titles.insert(id, title.to_string());
        self
    }

    pub fn failing(mut self, ids: &[u64]) -> Self {
        self.failing.extend(ids);
        self
    }

    pub fn delayed(mut self, id: u64, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    /// Every record comes back tagged `tag`, whatever the entry says.
    pub fn with_category(mut self, tag: Tag) -> Self {
        self.category = Some(tag);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataLookup for StubLookup {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn lookup(&self, entry: &Entry) -> anyhow::Result<MetadataRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&entry.id) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(&entry.id) {
            anyhow::bail!("stub failure for {}", entry);
        }

        let title = self
            .titles
            .get(&entry.id)
            .cloned()
            .unwrap_or_else(|| format!("Title {}", entry.id));

        Ok(MetadataRecord {
            id: entry.id,
            display_title: title,
            poster_path: Some(format!("/{}.jpg", entry.id)),
            release_year: Some(2000),
            overview: None,
            average_rating: Some(7.0),
            media_type: entry.media_type,
            category: self.category.unwrap_or(entry.tag),
        })
    }
}

/// Cache over `lookup` with a fresh in-memory store.
pub fn memory_cache(lookup: Arc<StubLookup>) -> (MediaMetadataCache, Arc<MemoryStore>) {
    memory_cache_with(lookup, CacheSettings::default())
}

pub fn memory_cache_with(
    lookup: Arc<StubLookup>,
    settings: CacheSettings,
) -> (MediaMetadataCache, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let cache = MediaMetadataCache::new(lookup, store.clone() as Arc<dyn SnapshotStore>, settings);
    (cache, store)
}

/// `count` movie entries with ids `1..=count`.
pub fn movies(count: u64) -> Vec<Entry> {
    (1..=count)
        .map(|id| Entry::new(id, MediaType::Movie, Tag::Current))
        .collect()
}

/// Record as [`StubLookup`] would produce it for `entry`.
pub fn stub_record(entry: &Entry) -> MetadataRecord {
    MetadataRecord {
        id: entry.id,
        display_title: format!("Title {}", entry.id),
        poster_path: Some(format!("/{}.jpg", entry.id)),
        release_year: Some(2000),
        overview: None,
        average_rating: Some(7.0),
        media_type: entry.media_type,
        category: entry.tag,
    }
}
