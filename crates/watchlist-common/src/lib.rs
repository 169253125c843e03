//! Watchlist-Common: Shared types and errors.
//!
//! This crate provides the vocabulary used across the watchlist crates:
//!
//! - **Core Types**: [`Entry`], [`MediaType`], [`Tag`] and the resolved
//!   [`MetadataRecord`]
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use watchlist_common::{Entry, MediaType, Tag, Error, Result};
//!
//! let entry = Entry::new(550, MediaType::Movie, Tag::Favorite);
//! assert_eq!(entry.media_type.path_segment(), "movie");
//!
//! fn example() -> Result<()> {
//!     Err(Error::missing_credential("TMDB_API_KEY is not set"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
