//! Entity categories and the fixed-schema entity set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// The four buckets keyword matches are sorted into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityCategory {
    /// Product mentions (skincare, shoes, ...)
    Products,
    /// Content topics (review, tutorial, ...)
    Topics,
    /// Emotional tone (funny, calm, ...)
    Emotions,
    /// Intended audience (teens, moms, ...)
    TargetAudience,
}

/// Matched literal substrings per category.
///
/// Every category is always present, possibly empty. Values are the text as
/// it appeared in the (lower-cased) input, not canonical keywords, so
/// `"testimoni"` and `"review"` can coexist.
///
/// # Examples
///
/// ```
/// use rekakata_core::{EntityCategory, EntitySet};
///
/// let mut entities = EntitySet::default();
/// entities.insert(EntityCategory::Topics, "review");
/// assert!(entities.get(EntityCategory::Topics).contains("review"));
/// assert!(entities.get(EntityCategory::Emotions).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    #[serde(default)]
    products: BTreeSet<String>,
    #[serde(default)]
    topics: BTreeSet<String>,
    #[serde(default)]
    emotions: BTreeSet<String>,
    #[serde(default)]
    target_audience: BTreeSet<String>,
}

impl EntitySet {
    /// Matches recorded for `category`.
    pub fn get(&self, category: EntityCategory) -> &BTreeSet<String> {
        match category {
            EntityCategory::Products => &self.products,
            EntityCategory::Topics => &self.topics,
            EntityCategory::Emotions => &self.emotions,
            EntityCategory::TargetAudience => &self.target_audience,
        }
    }

    fn get_mut(&mut self, category: EntityCategory) -> &mut BTreeSet<String> {
        match category {
            EntityCategory::Products => &mut self.products,
            EntityCategory::Topics => &mut self.topics,
            EntityCategory::Emotions => &mut self.emotions,
            EntityCategory::TargetAudience => &mut self.target_audience,
        }
    }

    /// Record a match; duplicates collapse.
    pub fn insert(&mut self, category: EntityCategory, value: impl Into<String>) {
        self.get_mut(category).insert(value.into());
    }

    /// Iterate categories in declaration order with their matches.
    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &BTreeSet<String>)> {
        EntityCategory::iter().map(move |category| (category, self.get(category)))
    }

    /// Every matched value across all categories.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, values)| values.is_empty())
    }

    /// Total number of matches across categories.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, values)| values.len()).sum()
    }
}
