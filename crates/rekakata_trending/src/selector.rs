//! Trending element selection.

use crate::{CatalogData, GENERAL_HASHTAGS, RandomSource};
use rekakata_core::{
    EntityCategory, EntitySet, FormatEntry, LanguageCode, MAX_CTAS, MAX_HOOKS, MAX_SOUNDS,
    StyleEntry, TrendingBundle,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// How a trending format is matched against extracted topics.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormatMatching {
    /// First format that has any keywords, provided some topic was found
    #[default]
    Literal,
    /// First format with a keyword contained in an extracted topic
    Topics,
}

/// Picks a [`TrendingBundle`] for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingSelector {
    matching: FormatMatching,
}

impl TrendingSelector {
    /// Create a selector with the given format matching policy.
    pub fn new(matching: FormatMatching) -> Self {
        Self { matching }
    }

    /// Format matching policy in use.
    pub fn matching(&self) -> FormatMatching {
        self.matching
    }

    /// Select trending elements for `entities`.
    ///
    /// Format and visual style fall back to a random catalog entry when
    /// nothing matches. Hooks and calls to action are sampled without
    /// replacement. Hashtags combine every category named by an entity
    /// with the `general` category. Sounds are the first catalog entries.
    #[instrument(
        skip(self, entities, catalog, rng),
        fields(language = %language, matching = %self.matching)
    )]
    pub fn select(
        &self,
        entities: &EntitySet,
        language: &LanguageCode,
        catalog: &CatalogData,
        rng: &mut dyn RandomSource,
    ) -> TrendingBundle {
        let format = self.pick_format(entities, catalog.formats(), rng);
        let visual_style = pick_style(entities, catalog.visual_styles(), rng);
        let hooks = sample(catalog.hooks(), MAX_HOOKS, rng);
        let ctas = sample(catalog.ctas(), MAX_CTAS, rng);
        let hashtags = collect_hashtags(entities, catalog.hashtags());
        let sounds = catalog.sounds().iter().take(MAX_SOUNDS).cloned().collect();

        let bundle = TrendingBundle::new(format, visual_style, hooks, ctas, hashtags, sounds);
        debug!(
            format = bundle.format().as_ref().map(|f| f.name.as_str()),
            style = bundle.visual_style().as_ref().map(|s| s.name.as_str()),
            hashtags = bundle.hashtags().len(),
            "Selected trending elements"
        );
        bundle
    }

    fn pick_format(
        &self,
        entities: &EntitySet,
        formats: &[FormatEntry],
        rng: &mut dyn RandomSource,
    ) -> Option<FormatEntry> {
        let topics = entities.get(EntityCategory::Topics);
        if !topics.is_empty() {
            let matched = match self.matching {
                FormatMatching::Literal => formats.iter().find(|f| !f.keywords.is_empty()),
                FormatMatching::Topics => formats.iter().find(|f| {
                    f.keywords.iter().any(|keyword| {
                        let keyword = keyword.to_lowercase();
                        topics.iter().any(|topic| topic.contains(&keyword))
                    })
                }),
            };
            if let Some(format) = matched {
                return Some(format.clone());
            }
        }
        choose(formats, rng)
    }
}

fn pick_style(
    entities: &EntitySet,
    styles: &[StyleEntry],
    rng: &mut dyn RandomSource,
) -> Option<StyleEntry> {
    let haystack = entities
        .get(EntityCategory::Products)
        .iter()
        .chain(entities.get(EntityCategory::Topics))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    styles
        .iter()
        .find(|style| style.keywords.iter().any(|k| haystack.contains(k.as_str())))
        .cloned()
        .or_else(|| choose(styles, rng))
}

fn collect_hashtags(entities: &EntitySet, table: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    let values = entities.values().collect::<Vec<_>>().join(" ").to_lowercase();

    let mut hashtags: Vec<String> = table
        .iter()
        .filter(|(category, _)| category.as_str() != GENERAL_HASHTAGS)
        .filter(|(category, _)| values.contains(&category.to_lowercase()))
        .flat_map(|(_, tags)| tags.iter().cloned())
        .collect();
    if let Some(general) = table.get(GENERAL_HASHTAGS) {
        hashtags.extend(general.iter().cloned());
    }
    hashtags
}

fn choose<T: Clone>(items: &[T], rng: &mut dyn RandomSource) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len())).cloned()
}

fn sample(items: &[String], limit: usize, rng: &mut dyn RandomSource) -> Vec<String> {
    let amount = limit.min(items.len());
    if amount == 0 {
        return Vec::new();
    }
    rng.sample(items.len(), amount)
        .into_iter()
        .filter_map(|i| items.get(i).cloned())
        .collect()
}
