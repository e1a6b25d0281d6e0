//! The structured prompt recovered from generated text.

use crate::LanguageCode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Aspect ratio assumed when the generated text specifies none.
pub const DEFAULT_ASPECT_RATIO: &str = "9:16";

/// Keys of the visual specification table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
pub enum VisualField {
    /// Overall look
    #[strum(serialize = "Style")]
    Style,
    /// Camera work
    #[strum(serialize = "Camera")]
    Camera,
    /// Lighting setup
    #[strum(serialize = "Lighting")]
    Lighting,
    /// Frame aspect ratio
    #[strum(serialize = "Aspect Ratio")]
    AspectRatio,
    /// Emotional mood
    #[strum(serialize = "Mood")]
    Mood,
}

/// Visual specification table with a fixed five-key schema.
///
/// Unset fields are `None`; aspect ratio falls back to
/// [`DEFAULT_ASPECT_RATIO`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualSpecs {
    style: Option<String>,
    camera: Option<String>,
    lighting: Option<String>,
    aspect_ratio: String,
    mood: Option<String>,
}

impl Default for VisualSpecs {
    fn default() -> Self {
        Self {
            style: None,
            camera: None,
            lighting: None,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            mood: None,
        }
    }
}

impl VisualSpecs {
    /// Value recorded for `field`.
    pub fn get(&self, field: VisualField) -> Option<&str> {
        match field {
            VisualField::Style => self.style.as_deref(),
            VisualField::Camera => self.camera.as_deref(),
            VisualField::Lighting => self.lighting.as_deref(),
            VisualField::AspectRatio => Some(self.aspect_ratio.as_str()),
            VisualField::Mood => self.mood.as_deref(),
        }
    }

    /// Overwrite `field`.
    pub fn set(&mut self, field: VisualField, value: impl Into<String>) {
        let value = value.into();
        match field {
            VisualField::Style => self.style = Some(value),
            VisualField::Camera => self.camera = Some(value),
            VisualField::Lighting => self.lighting = Some(value),
            VisualField::AspectRatio => self.aspect_ratio = value,
            VisualField::Mood => self.mood = Some(value),
        }
    }
}

/// Sections of the short-form video script.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScriptField {
    /// Opening seconds that grab attention
    Hook,
    /// Main content
    Body,
    /// Closing call to action
    Cta,
}

impl ScriptField {
    /// Time range conventionally given to the section.
    pub fn time_range(self) -> &'static str {
        match self {
            ScriptField::Hook => "[0:00-0:03]",
            ScriptField::Body => "[0:03-0:45]",
            ScriptField::Cta => "[0:45-0:60]",
        }
    }

    /// Heading used when rendering.
    pub fn heading(self) -> &'static str {
        match self {
            ScriptField::Hook => "Hook",
            ScriptField::Body => "Body",
            ScriptField::Cta => "CTA",
        }
    }
}

/// Three-part script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Script {
    hook: Option<String>,
    body: Option<String>,
    cta: Option<String>,
}

impl Script {
    /// Text of `field`, when recovered.
    pub fn get(&self, field: ScriptField) -> Option<&str> {
        match field {
            ScriptField::Hook => self.hook.as_deref(),
            ScriptField::Body => self.body.as_deref(),
            ScriptField::Cta => self.cta.as_deref(),
        }
    }

    /// Record the text of `field`.
    pub fn set(&mut self, field: ScriptField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            ScriptField::Hook => self.hook = value,
            ScriptField::Body => self.body = value,
            ScriptField::Cta => self.cta = value,
        }
    }

    /// True when no section was recovered.
    pub fn is_empty(&self) -> bool {
        self.hook.is_none() && self.body.is_none() && self.cta.is_none()
    }
}

/// Final record derived from one generation.
///
/// Immutable once built; `raw_response` keeps the generated text verbatim
/// for debugging and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StructuredPrompt {
    master_prompt: Option<String>,
    visual_specs: VisualSpecs,
    script: Script,
    hashtags: Vec<String>,
    language: LanguageCode,
    raw_response: String,
}

impl StructuredPrompt {
    /// Assemble a structured prompt.
    pub fn new(
        master_prompt: Option<String>,
        visual_specs: VisualSpecs,
        script: Script,
        hashtags: Vec<String>,
        language: LanguageCode,
        raw_response: impl Into<String>,
    ) -> Self {
        Self {
            master_prompt,
            visual_specs,
            script,
            hashtags,
            language,
            raw_response: raw_response.into(),
        }
    }
}
