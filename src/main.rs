mod cli;

use watchlist::{
    cache::SessionFileStore,
    config::{self, Config},
    metadata::{providers::tmdb::poster_url, TmdbLookup},
    watchlist::{group_by_tag, missing_entries},
    CacheSettings, MediaMetadataCache, ResolutionSource,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

fn build_cache(config: &Config) -> MediaMetadataCache {
    let lookup = Arc::new(TmdbLookup::new(&config.tmdb));
    let store = Arc::new(SessionFileStore::new(config.cache.session_dir()));
    MediaMetadataCache::new(lookup, store, CacheSettings::from(&config.cache))
}

async fn resolve(config: Config, no_cache: bool, json: bool) -> Result<()> {
    if config.watchlist.is_empty() {
        println!("Watchlist is empty. Add [[watchlist]] entries to the config file.");
        return Ok(());
    }

    // The credential only matters on a miss; a fresh snapshot is served without it
    let cache = build_cache(&config);
    let resolution = match cache.resolve(&config.watchlist, !no_cache).await {
        Ok(resolution) => resolution,
        Err(watchlist::Error::MissingCredential(_)) => anyhow::bail!(
            "TMDB is not configured: set the {} environment variable",
            config.tmdb.api_key_env
        ),
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(
        source = ?resolution.source,
        failures = resolution.failures.len(),
        "Resolved watchlist"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution.records)?);
    } else {
        for (tag, records) in group_by_tag(&resolution.records) {
            println!("{}", tag.heading());
            for record in records {
                print!("  {}", record.display_title);
                if let Some(year) = record.release_year {
                    print!(" ({})", year);
                }
                if let Some(rating) = record.average_rating {
                    print!(" - {:.1}/10", rating);
                }
                println!(" [{}]", record.media_type);
                if let Some(ref path) = record.poster_path {
                    println!("      {}", poster_url(path, "w500"));
                }
            }
            println!();
        }
        if resolution.source == ResolutionSource::Cache {
            println!("(served from session cache)");
        }
    }

    let missing = missing_entries(&config.watchlist, &resolution.records);
    if missing > 0 {
        for failure in &resolution.failures {
            eprintln!("  {}: {}", failure.entry, failure.reason);
        }
        eprintln!(
            "{} of {} entries could not be loaded. Retry with `watchlist resolve --no-cache`.",
            missing,
            config.watchlist.len()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "watchlist=debug,watchlist_common=debug,reqwest=debug".to_string()
        } else {
            "watchlist=warn".to_string()
        }
    });

    // Logs go to stderr so `resolve --json` stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { no_cache, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve(config, no_cache, json))
        }
        Commands::Invalidate => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            build_cache(&config).invalidate();
            println!(
                "Cleared cached watchlist in {}",
                config.cache.session_dir().display()
            );
            Ok(())
        }
        Commands::Check => check(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("watchlist {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn check(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let cache = build_cache(&config);

    if cache.is_backing_service_configured() {
        println!("✓ TMDB credential found in {}", config.tmdb.api_key_env);
        Ok(())
    } else {
        println!("✗ TMDB credential missing: {} is not set", config.tmdb.api_key_env);
        anyhow::bail!("TMDB is not configured")
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  TMDB: {}", config.tmdb.base_url);
            println!("  Credential variable: {}", config.tmdb.api_key_env);
            println!("  Cache TTL: {}s", config.cache.ttl_secs);
            println!("  Session dir: {}", config.cache.session_dir().display());
            println!("  Watchlist entries: {}", config.watchlist.len());
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  TMDB: {}", config.tmdb.base_url);
            println!("  Cache TTL: {}s", config.cache.ttl_secs);
        }
    }

    Ok(())
}
