use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use watchlist_common::Entry;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Entries to resolve, in display order.
    #[serde(default)]
    pub watchlist: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "TMDB_API_KEY".to_string()
}
fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "en-US".to_string()
}
fn default_timeout() -> u64 {
    30
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            language: default_language(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Snapshot lifetime in seconds (default: 3600)
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Directory holding the session snapshot (default: <temp>/watchlist-session)
    #[serde(default)]
    pub session_dir: Option<PathBuf>,

    /// Store a batch in which every lookup failed (default: true)
    #[serde(default = "default_cache_empty_batches")]
    pub cache_empty_batches: bool,
}

fn default_ttl() -> u64 {
    3600
}
fn default_cache_empty_batches() -> bool {
    true
}

impl CacheConfig {
    /// Resolved session directory, expanding `~` when configured.
    pub fn session_dir(&self) -> PathBuf {
        match &self.session_dir {
            Some(dir) => {
                let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
                PathBuf::from(expanded)
            }
            None => std::env::temp_dir().join("watchlist-session"),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            session_dir: None,
            cache_empty_batches: default_cache_empty_batches(),
        }
    }
}
