//! Core type definitions for watchlist entries and resolved records.
//!
//! All enums are serialized in lowercase, matching both the configuration
//! file and the path segments used by the metadata service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection of the metadata service an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A feature film.
    Movie,
    /// A television series.
    Tv,
}

impl MediaType {
    /// Path segment used by the lookup endpoint (`/movie/{id}`, `/tv/{id}`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            _ => Err(format!("Invalid media type: {}", s)),
        }
    }
}

/// Watchlist collection an entry belongs to.
///
/// The variant order is the display order used when grouping records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Currently watching.
    Current,
    /// Waiting for the next season or release.
    Waiting,
    /// Worth watching again.
    Rewatch,
    /// All-time favourites.
    Favorite,
}

impl Tag {
    /// All tags in display order.
    pub const ALL: [Tag; 4] = [Tag::Current, Tag::Waiting, Tag::Rewatch, Tag::Favorite];

    /// Human readable heading for the collection.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Current => "Currently Watching",
            Self::Waiting => "Waiting For",
            Self::Rewatch => "Rewatching",
            Self::Favorite => "Favorites",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Waiting => write!(f, "waiting"),
            Self::Rewatch => write!(f, "rewatch"),
            Self::Favorite => write!(f, "favorite"),
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "waiting" => Ok(Self::Waiting),
            "rewatch" => Ok(Self::Rewatch),
            "favorite" => Ok(Self::Favorite),
            _ => Err(format!("Invalid tag: {}", s)),
        }
    }
}

/// One configured item to resolve.
///
/// Entries are not deduplicated: the same `(id, media_type)` listed twice
/// is looked up twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Metadata service identifier.
    pub id: u64,
    /// Service collection to query.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Watchlist collection, carried through to the resolved record.
    pub tag: Tag,
}

impl Entry {
    /// Create a new entry.
    pub fn new(id: u64, media_type: MediaType, tag: Tag) -> Self {
        Self { id, media_type, tag }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.media_type, self.id)
    }
}

/// Display metadata for one resolved entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Metadata service identifier.
    pub id: u64,
    /// Movie title or series name.
    pub display_title: String,
    /// Poster path fragment (e.g. `/abc.jpg`), if the service has one.
    pub poster_path: Option<String>,
    /// Year of release or first air date.
    pub release_year: Option<u16>,
    /// Synopsis.
    pub overview: Option<String>,
    /// Community vote average (0.0 - 10.0).
    pub average_rating: Option<f64>,
    /// Collection the record was fetched from.
    pub media_type: MediaType,
    /// Watchlist collection copied from the originating [`Entry`].
    pub category: Tag,
}
