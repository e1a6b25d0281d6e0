//! Trending catalog storage.

use derive_getters::Getters;
use parking_lot::RwLock;
use rekakata_core::{FormatEntry, SoundEntry, StyleEntry};
use rekakata_error::{CatalogError, CatalogErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Hashtag category that every catalog must carry.
pub const GENERAL_HASHTAGS: &str = "general";

/// Parsed catalog document.
///
/// Hashtag categories are kept name-ordered so selection is
/// deterministic for a given catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CatalogData {
    #[serde(default)]
    formats: Vec<FormatEntry>,
    #[serde(default)]
    visual_styles: Vec<StyleEntry>,
    #[serde(default)]
    hooks: Vec<String>,
    #[serde(default, rename = "cta")]
    ctas: Vec<String>,
    #[serde(default)]
    hashtags: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    sounds: Vec<SoundEntry>,
}

impl CatalogData {
    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// `Parse` when the text is not a catalog document, `MissingGeneral`
    /// when the hashtag table has no `general` category.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CatalogError::new(CatalogErrorKind::Parse(e.to_string())))?;
        Self::from_value(value)
    }

    /// Build a catalog from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let data: Self = serde_json::from_value(value)
            .map_err(|e| CatalogError::new(CatalogErrorKind::Parse(e.to_string())))?;
        if !data.hashtags.contains_key(GENERAL_HASHTAGS) {
            return Err(CatalogError::new(CatalogErrorKind::MissingGeneral));
        }
        Ok(data)
    }

    /// Small built-in catalog used when the document cannot be read.
    pub fn fallback() -> Self {
        let platforms = vec![
            "tiktok".to_string(),
            "instagram".to_string(),
            "youtube".to_string(),
        ];
        Self {
            formats: vec![
                FormatEntry {
                    name: "POV".to_string(),
                    platforms: platforms.clone(),
                    keywords: vec!["pov".to_string()],
                },
                FormatEntry {
                    name: "Tutorial".to_string(),
                    platforms,
                    keywords: vec!["tutorial".to_string()],
                },
            ],
            visual_styles: vec![
                StyleEntry {
                    name: "Clean".to_string(),
                    keywords: vec!["clean".to_string()],
                    style: "minimalist".to_string(),
                    camera: "close-up".to_string(),
                },
                StyleEntry {
                    name: "Cinematic".to_string(),
                    keywords: vec!["cinematic".to_string()],
                    style: "dramatic".to_string(),
                    camera: "wide shots".to_string(),
                },
            ],
            hooks: vec!["Ini rahasianya!".to_string(), "Coba deh ini!".to_string()],
            ctas: vec![
                "Follow untuk lebih lanjut ✨".to_string(),
                "Save biar nggak lupa! 🔖".to_string(),
            ],
            hashtags: BTreeMap::from([(
                GENERAL_HASHTAGS.to_string(),
                vec![
                    "#viral".to_string(),
                    "#fyp".to_string(),
                    "#trending".to_string(),
                ],
            )]),
            sounds: Vec::new(),
        }
    }

    /// Hashtags of the mandatory `general` category.
    pub fn general_hashtags(&self) -> &[String] {
        self.hashtags
            .get(GENERAL_HASHTAGS)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Process-wide trending catalog.
///
/// Readers take an [`Arc`] snapshot, so an update never disturbs a request
/// that is already selecting from the previous version. The document is
/// read on first use; if that fails the built-in fallback is used instead
/// and the failure is only logged.
///
/// # Examples
///
/// ```
/// use rekakata_trending::TrendingCatalog;
///
/// let catalog = TrendingCatalog::new("/nonexistent/trending.json");
/// let data = catalog.snapshot();
/// assert_eq!(data.formats().len(), 2);
/// ```
#[derive(Debug)]
pub struct TrendingCatalog {
    path: Option<PathBuf>,
    data: RwLock<Option<Arc<CatalogData>>>,
}

impl TrendingCatalog {
    /// Catalog backed by the JSON document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            data: RwLock::new(None),
        }
    }

    /// Catalog held only in memory; updates are not persisted.
    pub fn in_memory(data: CatalogData) -> Self {
        Self {
            path: None,
            data: RwLock::new(Some(Arc::new(data))),
        }
    }

    /// Backing document, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current catalog contents, loading them on first access.
    pub fn snapshot(&self) -> Arc<CatalogData> {
        if let Some(data) = self.data.read().clone() {
            return data;
        }

        let mut guard = self.data.write();
        if let Some(data) = guard.as_ref() {
            return Arc::clone(data);
        }
        let loaded = Arc::new(self.load());
        *guard = Some(Arc::clone(&loaded));
        loaded
    }

    /// Deep-merge `patch` into the catalog, persist it and swap it in.
    ///
    /// Objects merge key by key; every other value, arrays included,
    /// replaces what was there. Concurrent updates are serialized and the
    /// in-memory catalog only changes once the merged document has been
    /// validated and written.
    ///
    /// # Errors
    ///
    /// `Merge` when `patch` is not an object, `Parse`/`MissingGeneral` when
    /// the merged document is not a valid catalog, `Persist` when writing
    /// the document fails.
    #[instrument(skip(self, patch), fields(path = ?self.path))]
    pub fn update(&self, patch: Value) -> Result<Arc<CatalogData>, CatalogError> {
        if !patch.is_object() {
            return Err(CatalogError::new(CatalogErrorKind::Merge(
                "update must be a JSON object".to_string(),
            )));
        }

        let mut guard = self.data.write();
        let current = match guard.as_ref() {
            Some(data) => Arc::clone(data),
            None => Arc::new(self.load()),
        };

        let mut merged = serde_json::to_value(current.as_ref())
            .map_err(|e| CatalogError::new(CatalogErrorKind::Merge(e.to_string())))?;
        deep_merge(&mut merged, patch);
        let data = CatalogData::from_value(merged)?;

        if let Some(path) = &self.path {
            persist(path, &data)?;
        }

        let data = Arc::new(data);
        *guard = Some(Arc::clone(&data));
        info!(
            formats = data.formats.len(),
            styles = data.visual_styles.len(),
            hashtag_categories = data.hashtags.len(),
            "Trending catalog updated"
        );
        Ok(data)
    }

    fn load(&self) -> CatalogData {
        let Some(path) = &self.path else {
            return CatalogData::fallback();
        };

        match read_catalog(path) {
            Ok(data) => {
                info!(
                    path = %path.display(),
                    formats = data.formats.len(),
                    "Loaded trending catalog"
                );
                data
            }
            Err(e) => {
                warn!(error = %e.kind, path = %path.display(), "Using fallback trending catalog");
                CatalogData::fallback()
            }
        }
    }
}

fn read_catalog(path: &Path) -> Result<CatalogData, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::new(CatalogErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    CatalogData::from_json(&text)
}

fn persist(path: &Path, data: &CatalogData) -> Result<(), CatalogError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| CatalogError::new(CatalogErrorKind::Persist(e.to_string())))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CatalogError::new(CatalogErrorKind::Persist(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, json).map_err(|e| {
        CatalogError::new(CatalogErrorKind::Persist(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| {
        CatalogError::new(CatalogErrorKind::Persist(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    debug!(path = %path.display(), "Persisted trending catalog");
    Ok(())
}

fn deep_merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
