//! Platform optimization for RekaKata.
//!
//! Specifications, caption suggestions and posting schedules for TikTok,
//! Instagram Reels and YouTube Shorts, plus a simple recommendation of the
//! best platform for a content type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod optimizer;
mod platform;

pub use optimizer::PlatformOptimizer;
pub use platform::{Platform, PlatformSpec};
