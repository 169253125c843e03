//! Watchlist - session-cached media metadata for a personal home page
//!
//! This library crate exposes the core functionality for integration testing.

pub mod cache;
pub mod config;
pub mod metadata;
pub mod watchlist;

pub use cache::{CacheSettings, MediaMetadataCache, Resolution, ResolutionSource};
pub use watchlist_common::{Entry, Error, MediaType, MetadataRecord, Result, Tag};
