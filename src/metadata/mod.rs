//! Metadata lookups against external services.
//!
//! # Module layout
//!
//! - [`provider`] -- The [`MetadataLookup`] trait.
//! - [`providers`] -- Concrete backends (TMDB).

pub mod provider;
pub mod providers;

pub use provider::MetadataLookup;
pub use providers::TmdbLookup;
