//! TMDB (The Movie Database) metadata lookup.
//!
//! Implements [`MetadataLookup`] by querying the TMDB v3 detail endpoints
//! (`/movie/{id}` and `/tv/{id}`).
//!
//! Features:
//! - Credential read from the environment on every call, so a key exported
//!   after start-up is picked up without rebuilding the client.
//! - Configurable request timeout (30 seconds by default).
//! - No retries and no rate limiting; a failed request fails only its entry.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use watchlist_common::{Entry, Error, MetadataRecord};

use crate::config::TmdbConfig;
use crate::metadata::provider::MetadataLookup;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

/// Detail payload shared by movies and TV shows. Movies carry `title` and
/// `release_date`, shows carry `name` and `first_air_date`.
#[derive(Debug, Deserialize)]
struct TmdbDetail {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f64>,
}

// ---------------------------------------------------------------------------
// Lookup implementation
// ---------------------------------------------------------------------------

/// TMDB metadata lookup.
///
/// # Examples
///
/// ```no_run
/// use watchlist::config::TmdbConfig;
/// use watchlist::metadata::TmdbLookup;
///
/// let lookup = TmdbLookup::new(&TmdbConfig::default());
/// ```
pub struct TmdbLookup {
    client: Client,
    base_url: String,
    api_key_env: String,
    language: String,
}

impl TmdbLookup {
    /// Create a new lookup from the `[tmdb]` configuration section.
    pub fn new(config: &TmdbConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key_env: config.api_key_env.clone(),
            language: config.language.clone(),
        }
    }

    /// Read the API key from the environment.
    fn api_key(&self) -> watchlist_common::Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::missing_credential(format!(
                "{} is not set",
                self.api_key_env
            ))),
        }
    }

    fn url(&self, entry: &Entry) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            entry.media_type.path_segment(),
            entry.id
        )
    }
}

/// Extract a four-digit year from a date string like `"2023-04-15"`.
fn parse_year(date: Option<&str>) -> Option<u16> {
    date.and_then(|d| d.get(..4)).and_then(|y| y.parse::<u16>().ok())
}

/// Convert a TMDB poster path fragment to a full URL at the given size
/// (e.g. `"w500"` or `"original"`).
pub fn poster_url(path: &str, size: &str) -> String {
    format!("{TMDB_IMAGE_BASE}/{size}{path}")
}

/// Normalize a detail payload into a record for `entry`.
fn to_record(entry: &Entry, detail: TmdbDetail) -> anyhow::Result<MetadataRecord> {
    let display_title = detail
        .title
        .or(detail.name)
        .filter(|t| !t.is_empty())
        .with_context(|| format!("TMDB response for {entry} has no title or name"))?;

    let date = detail.release_date.or(detail.first_air_date);

    Ok(MetadataRecord {
        id: detail.id,
        display_title,
        poster_path: detail.poster_path,
        release_year: parse_year(date.as_deref()),
        overview: detail.overview,
        average_rating: detail.vote_average,
        media_type: entry.media_type,
        category: entry.tag,
    })
}

#[async_trait]
impl MetadataLookup for TmdbLookup {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn is_available(&self) -> bool {
        self.api_key().is_ok()
    }

    async fn lookup(&self, entry: &Entry) -> anyhow::Result<MetadataRecord> {
        let api_key = self.api_key()?;
        let url = self.url(entry);
        debug!(url = %url, "TMDB get {}", entry.media_type);

        let resp = self
            .client
            .get(&url)
            .query(&[("api_key", api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await
            .with_context(|| format!("TMDB request failed: {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!(Error::lookup(format!("TMDB {status} for {entry}")));
        }

        let detail: TmdbDetail = resp
            .json()
            .await
            .with_context(|| format!("failed to parse TMDB detail response for {entry}"))?;

        to_record(entry, detail)
    }
}
