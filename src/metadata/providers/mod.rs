//! Concrete metadata lookup implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`MetadataLookup`](super::MetadataLookup) trait.

pub mod tmdb;

pub use tmdb::TmdbLookup;
