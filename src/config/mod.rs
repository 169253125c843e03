mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Invalid config file: {:?}", path))
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./watchlist.toml",
        "./config.toml",
        "~/.config/watchlist/config.toml",
        "/etc/watchlist/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.tmdb.api_key_env.trim().is_empty() {
        anyhow::bail!("tmdb.api_key_env cannot be empty");
    }

    if !config.tmdb.base_url.starts_with("http") {
        anyhow::bail!(
            "tmdb.base_url must be an http(s) URL, got '{}'",
            config.tmdb.base_url
        );
    }

    if config.tmdb.timeout_secs == 0 {
        anyhow::bail!("tmdb.timeout_secs cannot be 0");
    }

    if config.cache.ttl_secs == 0 {
        anyhow::bail!("cache.ttl_secs cannot be 0");
    }

    // Duplicates are legal, they are just looked up twice
    let mut seen = HashSet::new();
    for entry in &config.watchlist {
        if !seen.insert((entry.id, entry.media_type)) {
            tracing::warn!("Watchlist entry {} is listed more than once", entry);
        }
    }

    Ok(())
}
