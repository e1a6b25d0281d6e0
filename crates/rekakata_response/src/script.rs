//! Script section recovery.
//!
//! Generated scripts mark their sections in many ways:
//!
//! ```text
//! ## Hook [0:00-0:03]        ### **Body**            1. CTA:
//! **Hook (0-3s):** text      HOOK                    Call to Action - text
//! ```
//!
//! A heading line names one of the three fields, optionally behind one to
//! three `#` markers or a list number, optionally wrapped in `**`, `***` or
//! `__`, optionally followed by a bracketed time range. Headings without a
//! `#` marker or emphasis are only accepted when a colon, dash or time range
//! follows the word, or nothing does, so ordinary sentences starting with
//! "Body" are not mistaken for headings.
//!
//! A section's content runs from the heading to the next heading of a
//! different field or the end of the text, so sub-headings such as
//! `### Visual` stay inside a hook or body. The CTA section also stops at a
//! Markdown heading or a `---` rule.

use regex::Regex;
use rekakata_core::{Script, ScriptField};
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?P<hashes>#{1,3})[ \t]+|(?P<number>\d{1,2}[.)])[ \t]+)?(?P<open>\*{2,3}|__)?[ \t]*(?P<word>call[ -]to[ -]action|hook|body|cta)(?P<tail>(?:[^\p{L}\p{N}].*)?)$",
    )
    .expect("Valid script heading regex")
});

static TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<adorn>(?:[\s*_:\-–—]|[\[(][^\])]*\d[^\])]*[\])])*)(?P<rest>.*)$")
        .expect("Valid heading tail regex")
});

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\[(][^\])]*\d[^\])]*[\])]").expect("Valid time range regex")
});

static MARKDOWN_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s+\S").expect("Valid markdown heading regex"));

/// How a section heading is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingStyle {
    /// Bare word, possibly behind `#` markers: `## Hook`, `CTA:`
    Plain,
    /// Word wrapped in emphasis markers of the given width: `**Hook**`
    Emphasized(u8),
    /// Numbered list item: `2. Body`
    Numbered,
}

/// A recognized section of generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch {
    /// Byte offset of the heading line
    pub start: usize,
    /// Byte offset where the section ends
    pub end: usize,
    /// Cleaned section text, possibly empty
    pub content: String,
}

/// Recognizes the section of one script field written in one heading style.
///
/// # Examples
///
/// ```
/// use rekakata_core::ScriptField;
/// use rekakata_response::{HeadingStyle, SectionMatcher};
///
/// let text = "**Hook:** Wait for it\n**Body:** The reveal";
/// let matcher = SectionMatcher::new(ScriptField::Hook, HeadingStyle::Emphasized(2));
/// let found = matcher.find(text).unwrap();
/// assert_eq!(found.content, "Wait for it");
/// assert!(SectionMatcher::new(ScriptField::Hook, HeadingStyle::Numbered).find(text).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatcher {
    field: ScriptField,
    style: HeadingStyle,
}

impl SectionMatcher {
    /// Matcher for `field` headings written in `style`.
    pub fn new(field: ScriptField, style: HeadingStyle) -> Self {
        Self { field, style }
    }

    /// Field this matcher recognizes.
    pub fn field(&self) -> ScriptField {
        self.field
    }

    /// Heading style this matcher recognizes.
    pub fn style(&self) -> HeadingStyle {
        self.style
    }

    /// Matchers for `field`, strongest decoration first.
    pub fn for_field(field: ScriptField) -> [SectionMatcher; 4] {
        [
            Self::new(field, HeadingStyle::Emphasized(3)),
            Self::new(field, HeadingStyle::Emphasized(2)),
            Self::new(field, HeadingStyle::Numbered),
            Self::new(field, HeadingStyle::Plain),
        ]
    }

    /// First section of this matcher's field and style in `text`.
    pub fn find(&self, text: &str) -> Option<SectionMatch> {
        let mut offset = 0;
        let mut section: Option<(usize, Vec<&str>)> = None;

        for raw in text.split_inclusive('\n') {
            let line_start = offset;
            offset += raw.len();
            let line = raw.trim_end_matches(['\n', '\r']);

            if let Some((start, lines)) = section.as_mut() {
                let heading = parse_heading(line);
                let other_field = heading.as_ref().is_some_and(|h| h.field != self.field);
                let same_field = heading.is_some() && !other_field;
                let trailing_block = self.field == ScriptField::Cta
                    && ((!same_field && MARKDOWN_HEADING.is_match(line))
                        || line.trim_start().starts_with("---"));
                if other_field || trailing_block {
                    return Some(SectionMatch {
                        start: *start,
                        end: line_start,
                        content: clean(&lines.join("\n")),
                    });
                }
                lines.push(line);
                continue;
            }

            if let Some(heading) = parse_heading(line) {
                if heading.field == self.field && heading.style == self.style {
                    section = Some((line_start, heading.inline.into_iter().collect()));
                }
            }
        }

        section.map(|(start, lines)| SectionMatch {
            start,
            end: text.len(),
            content: clean(&lines.join("\n")),
        })
    }
}

/// Recover the hook, body and CTA sections.
///
/// Requires a `SCRIPT` marker (any case) somewhere in the text. For each
/// field the earliest section found by any of its matchers wins; an empty
/// section leaves the field absent.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_script(text: &str) -> Script {
    let mut script = Script::default();
    if !text.to_uppercase().contains("SCRIPT") {
        warn!("No script section in generated text");
        return script;
    }

    for field in ScriptField::iter() {
        let found = SectionMatcher::for_field(field)
            .iter()
            .filter_map(|matcher| matcher.find(text))
            .filter(|section| !section.content.is_empty())
            .min_by_key(|section| section.start);

        match found {
            Some(section) => {
                debug!(%field, chars = section.content.chars().count(), "Extracted script section");
                script.set(field, section.content);
            }
            None => debug!(%field, "Script section not found"),
        }
    }

    script
}

#[derive(Debug)]
struct Heading<'a> {
    field: ScriptField,
    style: HeadingStyle,
    inline: Option<&'a str>,
}

fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING.captures(line)?;
    let word = caps.name("word")?.as_str().to_lowercase();
    let field = match word.as_str() {
        "hook" => ScriptField::Hook,
        "body" => ScriptField::Body,
        _ => ScriptField::Cta,
    };

    let tail = caps.name("tail").map_or("", |m| m.as_str());
    let tail_caps = TAIL.captures(tail)?;
    let adorn = tail_caps.name("adorn").map_or("", |m| m.as_str());
    let rest = tail_caps
        .name("rest")
        .map_or("", |m| m.as_str())
        .trim()
        .trim_end_matches(['*', '_'])
        .trim();

    let timed = TIME_RANGE.is_match(adorn);
    let separated = TIME_RANGE
        .replace_all(adorn, "")
        .contains([':', '-', '–', '—']);

    let style = match (caps.name("open"), caps.name("number")) {
        (Some(open), _) => HeadingStyle::Emphasized(if open.as_str() == "***" { 3 } else { 2 }),
        (None, Some(_)) => HeadingStyle::Numbered,
        (None, None) => HeadingStyle::Plain,
    };

    let decorated = caps.name("hashes").is_some() || caps.name("open").is_some();
    if !(decorated || timed || separated || rest.is_empty()) {
        return None;
    }

    let inline = (separated && !rest.is_empty()).then_some(rest);
    Some(Heading {
        field,
        style,
        inline,
    })
}

fn clean(content: &str) -> String {
    content
        .trim()
        .trim_matches(['"', '\'', '*'])
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(line: &str) -> Option<(ScriptField, HeadingStyle, Option<&str>)> {
        parse_heading(line).map(|h| (h.field, h.style, h.inline))
    }

    #[test]
    fn recognizes_heading_forms() {
        assert_eq!(
            heading("## Hook [0:00-0:03]"),
            Some((ScriptField::Hook, HeadingStyle::Plain, None))
        );
        assert_eq!(
            heading("### ***BODY***"),
            Some((ScriptField::Body, HeadingStyle::Emphasized(3), None))
        );
        assert_eq!(
            heading("**Hook (0-3s):** Stop scrolling"),
            Some((ScriptField::Hook, HeadingStyle::Emphasized(2), Some("Stop scrolling")))
        );
        assert_eq!(
            heading("3. Call to Action"),
            Some((ScriptField::Cta, HeadingStyle::Numbered, None))
        );
        assert_eq!(
            heading("CTA: Follow for more"),
            Some((ScriptField::Cta, HeadingStyle::Plain, Some("Follow for more")))
        );
        assert_eq!(
            heading("__Call-to-Action__"),
            Some((ScriptField::Cta, HeadingStyle::Emphasized(2), None))
        );
    }

    #[test]
    fn rejects_sentences_and_tags() {
        assert!(heading("Body lotion is the star of this video").is_none());
        assert!(heading("Hooks keep viewers watching").is_none());
        assert!(heading("#hook #viral").is_none());
        assert!(heading("#### Hook").is_none());
        assert!(heading("| Hook | text |").is_none());
    }

    #[test]
    fn section_ends_at_other_field() {
        let text = "## Hook\nLine one\nLine two\n\n## Body\nMain";
        let found = SectionMatcher::new(ScriptField::Hook, HeadingStyle::Plain)
            .find(text)
            .unwrap();
        assert_eq!(found.start, 0);
        assert_eq!(found.content, "Line one\nLine two");
        assert_eq!(&text[found.end..], "## Body\nMain");
    }

    #[test]
    fn body_keeps_subheadings_and_rules() {
        let text = "## Body\n### Scene 1\nPour\n---\n### Scene 2\nSip\n## CTA\nGo";
        let found = SectionMatcher::new(ScriptField::Body, HeadingStyle::Plain)
            .find(text)
            .unwrap();
        assert_eq!(found.content, "### Scene 1\nPour\n---\n### Scene 2\nSip");
        assert_eq!(&text[found.end..], "## CTA\nGo");
    }

    #[test]
    fn cta_ends_at_markdown_heading_or_rule() {
        let text = "**CTA:** Follow!\n\n# HASHTAGS\n#fyp";
        let found = SectionMatcher::new(ScriptField::Cta, HeadingStyle::Emphasized(2))
            .find(text)
            .unwrap();
        assert_eq!(found.content, "Follow!");

        let text = "CTA\nSave this\n---\nfooter";
        let found = SectionMatcher::new(ScriptField::Cta, HeadingStyle::Plain)
            .find(text)
            .unwrap();
        assert_eq!(found.content, "Save this");
    }

    #[test]
    fn content_is_stripped_of_quotes_and_emphasis() {
        let text = "## Hook\n\"'Kamu pasti belum tahu ini!'\"\n## Body\n**Langkah pertama**";
        let script = extract_script(&format!("# SCRIPT\n{text}"));
        assert_eq!(script.hook().as_deref(), Some("Kamu pasti belum tahu ini!"));
        assert_eq!(script.body().as_deref(), Some("Langkah pertama"));
    }

    #[test]
    fn earliest_matcher_wins() {
        let text = "# SCRIPT\nHook: first\n## Body\nmain\n**Hook** second\ntext";
        let script = extract_script(text);
        assert_eq!(script.hook().as_deref(), Some("first"));
        assert_eq!(script.body().as_deref(), Some("main"));
    }

    #[test]
    fn missing_marker_leaves_script_empty() {
        let text = "## Hook\nX\n## Body\nY";
        assert!(extract_script(text).is_empty());
    }
}
