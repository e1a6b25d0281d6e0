//! Trending content catalog for RekaKata.
//!
//! The [`TrendingCatalog`] holds the formats, visual styles, hooks, calls
//! to action, hashtags and sounds that are currently popular. It is
//! loaded lazily from a JSON document and falls back to a small built-in
//! catalog when the document is missing or malformed.
//!
//! The [`TrendingSelector`] picks a [`TrendingBundle`](rekakata_core::TrendingBundle)
//! for one request. Random choices go through a [`RandomSource`] so tests
//! can script them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod random;
mod selector;

pub use catalog::{CatalogData, GENERAL_HASHTAGS, TrendingCatalog};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use selector::{FormatMatching, TrendingSelector};
