//! Markdown and JSON rendering of structured prompts.
//!
//! This is the only place absent values become the `"N/A"` placeholder.

use rekakata_core::{ScriptField, StructuredPrompt, VisualField};
use rekakata_error::{ExportError, ExportErrorKind};
use rekakata_platform::PlatformSpec;
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Placeholder rendered for values the generated text did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Supported export formats.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    /// Markdown document
    #[default]
    #[strum(to_string = "md", serialize = "markdown")]
    #[serde(rename = "md", alias = "markdown")]
    Markdown,
    /// JSON document
    #[strum(serialize = "json")]
    Json,
}

impl ExportFormat {
    /// Parse a format name such as `"md"` or `"json"`.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` for any other name.
    #[track_caller]
    pub fn from_name(name: &str) -> Result<Self, ExportError> {
        Self::from_str(name.trim()).map_err(|_| {
            ExportError::new(ExportErrorKind::UnsupportedFormat(name.to_string()))
        })
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

/// Render `prompt` in `format`.
pub fn render(
    prompt: &StructuredPrompt,
    platforms: &[&PlatformSpec],
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(prompt, platforms)),
        ExportFormat::Json => render_json(prompt),
    }
}

/// Render `prompt` as a Markdown document.
///
/// Sections are `# MASTER PROMPT`, `# VISUAL SPECIFICATIONS`, `# SCRIPT`,
/// `# HASHTAGS` and, when `platforms` is not empty,
/// `# PLATFORM OPTIMIZATION`.
pub fn render_markdown(prompt: &StructuredPrompt, platforms: &[&PlatformSpec]) -> String {
    let mut out = String::new();

    out.push_str("# MASTER PROMPT\n\n");
    out.push_str(or_na(prompt.master_prompt().as_deref()));
    out.push_str("\n\n# VISUAL SPECIFICATIONS\n\n");
    out.push_str("| Element | Description |\n|---------|-------------|\n");
    for field in VisualField::iter() {
        let _ = writeln!(out, "| {} | {} |", field, or_na(prompt.visual_specs().get(field)));
    }

    out.push_str("\n# SCRIPT\n");
    for field in ScriptField::iter() {
        let _ = write!(
            out,
            "\n## {} {}\n\n{}\n",
            field.heading(),
            field.time_range(),
            or_na(prompt.script().get(field))
        );
    }

    out.push_str("\n# HASHTAGS\n\n");
    if prompt.hashtags().is_empty() {
        out.push_str(NOT_AVAILABLE);
    } else {
        let tags: Vec<String> = prompt
            .hashtags()
            .iter()
            .map(|tag| format!("#{}", tag.trim_start_matches('#')))
            .collect();
        out.push_str(&tags.join(" "));
    }
    out.push('\n');

    if !platforms.is_empty() {
        out.push_str("\n# PLATFORM OPTIMIZATION\n");
        for spec in platforms {
            let _ = write!(
                out,
                "\n## {}\n\n\
                 - **Aspect Ratio:** {}\n\
                 - **Resolution:** {}\n\
                 - **Max Duration:** {}\n\
                 - **Optimal Length:** {}\n\
                 - **Characteristics:** {}\n\
                 - **Caption Style:** {}\n\
                 - **Music:** {}\n\
                 - **Editing:** {}\n\
                 - **Posting Time:** {}\n",
                spec.platform.display_name(),
                spec.aspect_ratio,
                spec.resolution,
                spec.max_duration,
                spec.optimal_length,
                spec.characteristics,
                spec.caption_style,
                spec.music_suggestion,
                spec.editing_tips,
                spec.posting_time,
            );
        }
    }

    out
}

#[derive(Serialize)]
struct PromptDocument<'a> {
    master_prompt: &'a str,
    visual_specifications: VisualDocument<'a>,
    script: ScriptDocument<'a>,
    hashtags: &'a [String],
    language: &'a str,
    raw_response: &'a str,
}

#[derive(Serialize)]
struct VisualDocument<'a> {
    #[serde(rename = "Style")]
    style: &'a str,
    #[serde(rename = "Camera")]
    camera: &'a str,
    #[serde(rename = "Lighting")]
    lighting: &'a str,
    #[serde(rename = "Aspect Ratio")]
    aspect_ratio: &'a str,
    #[serde(rename = "Mood")]
    mood: &'a str,
}

#[derive(Serialize)]
struct ScriptDocument<'a> {
    hook: &'a str,
    body: &'a str,
    cta: &'a str,
}

/// Render `prompt` as a pretty-printed JSON document.
///
/// # Errors
///
/// `Serialize` if serialization fails.
pub fn render_json(prompt: &StructuredPrompt) -> Result<String, ExportError> {
    let specs = prompt.visual_specs();
    let script = prompt.script();
    let document = PromptDocument {
        master_prompt: or_na(prompt.master_prompt().as_deref()),
        visual_specifications: VisualDocument {
            style: or_na(specs.get(VisualField::Style)),
            camera: or_na(specs.get(VisualField::Camera)),
            lighting: or_na(specs.get(VisualField::Lighting)),
            aspect_ratio: or_na(specs.get(VisualField::AspectRatio)),
            mood: or_na(specs.get(VisualField::Mood)),
        },
        script: ScriptDocument {
            hook: or_na(script.get(ScriptField::Hook)),
            body: or_na(script.get(ScriptField::Body)),
            cta: or_na(script.get(ScriptField::Cta)),
        },
        hashtags: prompt.hashtags(),
        language: prompt.language().as_str(),
        raw_response: prompt.raw_response(),
    };

    serde_json::to_string_pretty(&document)
        .map_err(|e| ExportError::new(ExportErrorKind::Serialize(e.to_string())))
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::from_name("MD").unwrap(), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_name("markdown").unwrap(), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_name("json").unwrap(), ExportFormat::Json);
        let err = ExportFormat::from_name("pdf").unwrap_err();
        assert_eq!(err.kind, ExportErrorKind::UnsupportedFormat("pdf".to_string()));
        assert_eq!(ExportFormat::Json.extension(), "json");
    }
}
