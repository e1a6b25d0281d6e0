//! Keyword-category entity extraction.

use rekakata_core::{EntityCategory, EntitySet};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Alternation patterns per category, English and Indonesian.
///
/// Longer alternatives precede their prefixes so the literal match keeps
/// the full word.
const PATTERNS: &[(EntityCategory, &[&str])] = &[
    (
        EntityCategory::Products,
        &[
            "skincare",
            "makeup",
            "clothing|pakaian|baju",
            "food|makanan",
            "drink|minuman",
            "gadget",
            "handphone|phone|hp",
            "shoes|sepatu",
            "bag|tas",
            "book|buku",
        ],
    ),
    (
        EntityCategory::Topics,
        &[
            "review",
            "tutorial",
            "tips",
            "vlog",
            "challenge",
            "reaction",
            "unboxing",
            "testimoni|review",
            "promosi|promo",
        ],
    ),
    (
        EntityCategory::Emotions,
        &[
            "excited|exciting|seru",
            "happy|joyful|bahagia|senang",
            "sadness|sad|sedih",
            "angry|furious|marah",
            "funny|humorous|lucu",
            "inspiring|motivational|inspiratif|motivasi",
            "calm|peaceful|tenang",
            "energetic",
        ],
    ),
    (
        EntityCategory::TargetAudience,
        &[
            "teens|teen|remaja",
            "kids|children|anak-anak",
            "adults|adult|dewasa",
            "students|student|mahasiswa|pelajar",
            "mothers|mother|moms|mom|ibu",
            "professionals|profesional",
            "gamers|gamer",
        ],
    ),
];

static COMPILED: LazyLock<Vec<(EntityCategory, Vec<Regex>)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(category, patterns)| {
            let compiled = patterns
                .iter()
                .map(|pattern| Regex::new(pattern).expect("Valid entity pattern"))
                .collect();
            (*category, compiled)
        })
        .collect()
});

/// Scans text for category keywords.
///
/// Matching is substring-based on the lower-cased text, so partial-word
/// hits such as `"phone"` inside `"iphone"` are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    /// Create an extractor using the built-in keyword table.
    pub fn new() -> Self {
        Self
    }

    /// Extract entities from `text`.
    ///
    /// Every category is scanned independently over the whole text; a
    /// category without matches stays present and empty.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn extract(&self, text: &str) -> EntitySet {
        let lowered = text.to_lowercase();
        let mut entities = EntitySet::default();

        for (category, patterns) in COMPILED.iter() {
            for pattern in patterns {
                for found in pattern.find_iter(&lowered) {
                    entities.insert(*category, found.as_str());
                }
            }
        }

        debug!(matched = entities.len(), "Extracted entities");
        entities
    }
}
