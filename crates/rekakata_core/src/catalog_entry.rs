//! Entries of the trending catalog document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trending video format (POV, tutorial, GRWM, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEntry {
    /// Display name
    pub name: String,
    /// Platforms the format trends on
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Keywords associating topics with the format
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A trending visual style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    /// Display name
    pub name: String,
    /// Keywords associating products/topics with the style
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Short style description
    #[serde(default)]
    pub style: String,
    /// Suggested camera work
    #[serde(default)]
    pub camera: String,
}

/// A trending sound suggestion.
///
/// The catalog does not fix a schema for sounds beyond being objects, so
/// anything other than `name` is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Track name, when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}
