//! Hashtag extraction.

use regex::Regex;
use rekakata_core::MAX_HASHTAGS;
use std::sync::LazyLock;
use tracing::debug;

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+([^#]*)$").expect("Valid section heading regex"));

/// Recover hashtags from the hashtag section, or fall back to `fallback`.
///
/// The section opens at a line mentioning `HASHTAGS` (any case) and closes
/// at the next Markdown heading without further `#` characters or at a
/// `---` rule. Tokens starting with `#` are collected in order with the
/// leading `#` removed. When none are found the first fifteen `fallback`
/// entries are returned unchanged.
pub fn extract_hashtags(text: &str, fallback: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if is_marker(trimmed) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if SECTION_HEADING.is_match(trimmed) || trimmed.contains("---") {
            in_section = false;
            continue;
        }

        tags.extend(
            trimmed
                .split_whitespace()
                .filter(|word| word.starts_with('#'))
                .map(|word| word.trim_start_matches('#').trim_end_matches([',', ';']))
                .filter(|tag| !tag.is_empty())
                .map(str::to_string),
        );
    }

    if tags.is_empty() {
        debug!("No hashtags in generated text, using trending hashtags");
        return fallback.iter().take(MAX_HASHTAGS).cloned().collect();
    }
    tags
}

/// Marker lines mention hashtags without being a line of tags themselves.
fn is_marker(line: &str) -> bool {
    if !line.to_uppercase().contains("HASHTAGS") {
        return false;
    }
    let first = line.split_whitespace().next().unwrap_or_default();
    if first
        .trim_start_matches('#')
        .trim_end_matches(':')
        .eq_ignore_ascii_case("hashtags")
    {
        return true;
    }
    !(first.len() > 1 && first.starts_with('#') && !first[1..].starts_with('#'))
}
