//! Trending elements selected for one request.

use crate::{FormatEntry, SoundEntry, StyleEntry};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum hooks in a bundle.
pub const MAX_HOOKS: usize = 3;
/// Maximum calls-to-action in a bundle.
pub const MAX_CTAS: usize = 2;
/// Maximum hashtags in a bundle.
pub const MAX_HASHTAGS: usize = 15;
/// Maximum sound suggestions in a bundle.
pub const MAX_SOUNDS: usize = 3;

/// Catalog-derived content elements for a single request.
///
/// The constructor enforces the size caps and removes repeats (first
/// occurrence wins), so a bundle never violates them.
///
/// # Examples
///
/// ```
/// use rekakata_core::TrendingBundle;
///
/// let tags: Vec<String> = (0..20).map(|i| format!("#tag{}", i % 18)).collect();
/// let bundle = TrendingBundle::new(None, None, vec![], vec![], tags, vec![]);
/// assert_eq!(bundle.hashtags().len(), 15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct TrendingBundle {
    format: Option<FormatEntry>,
    visual_style: Option<StyleEntry>,
    hooks: Vec<String>,
    ctas: Vec<String>,
    hashtags: Vec<String>,
    sounds: Vec<SoundEntry>,
}

impl TrendingBundle {
    /// Assemble a bundle, deduplicating and truncating each list.
    pub fn new(
        format: Option<FormatEntry>,
        visual_style: Option<StyleEntry>,
        hooks: Vec<String>,
        ctas: Vec<String>,
        hashtags: Vec<String>,
        mut sounds: Vec<SoundEntry>,
    ) -> Self {
        sounds.truncate(MAX_SOUNDS);
        Self {
            format,
            visual_style,
            hooks: unique_prefix(hooks, MAX_HOOKS),
            ctas: unique_prefix(ctas, MAX_CTAS),
            hashtags: unique_prefix(hashtags, MAX_HASHTAGS),
            sounds,
        }
    }
}

/// First `limit` distinct values in first-seen order.
fn unique_prefix(values: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .take(limit)
        .collect()
}
