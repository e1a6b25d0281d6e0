//! Platform selection and recommendations.

use crate::{Platform, PlatformSpec};
use rekakata_core::LanguageCode;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Optimizes content for a configured set of target platforms.
///
/// # Examples
///
/// ```
/// use rekakata_platform::{Platform, PlatformOptimizer};
///
/// let optimizer = PlatformOptimizer::from_names(["instagram", "myspace"]);
/// assert_eq!(optimizer.platforms(), &[Platform::Instagram, Platform::TikTok]);
/// assert_eq!(optimizer.best_platform_for("tutorial"), Platform::Instagram);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformOptimizer {
    platforms: Vec<Platform>,
}

impl Default for PlatformOptimizer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PlatformOptimizer {
    /// Optimizer for `platforms`, or every platform when empty.
    pub fn new(platforms: Vec<Platform>) -> Self {
        let mut unique = Vec::with_capacity(platforms.len());
        for platform in platforms {
            if !unique.contains(&platform) {
                unique.push(platform);
            }
        }
        if unique.is_empty() {
            unique = Platform::iter().collect();
        }
        Self { platforms: unique }
    }

    /// Optimizer for platforms given by name; unknown names become TikTok.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|n| resolve(n.as_ref())).collect())
    }

    /// Target platforms in configured order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Specification for `platform`.
    pub fn optimize(&self, platform: Platform) -> &'static PlatformSpec {
        platform.spec()
    }

    /// Specification for a platform given by name.
    pub fn optimize_named(&self, name: &str) -> &'static PlatformSpec {
        resolve(name).spec()
    }

    /// Specifications for every target platform.
    #[instrument(skip(self), fields(platforms = self.platforms.len()))]
    pub fn optimize_all(&self) -> Vec<&'static PlatformSpec> {
        let specs: Vec<_> = self.platforms.iter().map(|p| p.spec()).collect();
        debug!(count = specs.len(), "Optimized for platforms");
        specs
    }

    /// Best target platform for a content type such as `"tutorial"`.
    ///
    /// Uses a fixed preference table filtered by the target platforms;
    /// unknown content types consider every target. Falls back to TikTok.
    pub fn best_platform_for(&self, content_type: &str) -> Platform {
        let preferred: &[Platform] = match content_type.to_lowercase().as_str() {
            "tutorial" => &[Platform::Instagram, Platform::YouTube],
            "review" => &[Platform::YouTube, Platform::TikTok],
            "challenge" => &[Platform::TikTok],
            "vlog" => &[Platform::YouTube, Platform::Instagram],
            "transformation" | "asmr" => &[Platform::TikTok, Platform::Instagram],
            _ => &self.platforms,
        };

        let recommendation = preferred
            .iter()
            .copied()
            .find(|p| self.platforms.contains(p))
            .unwrap_or(Platform::TikTok);
        debug!(content_type, %recommendation, "Recommended platform");
        recommendation
    }

    /// Caption ideas for `platform` in the given language.
    pub fn caption_suggestions(
        &self,
        platform: Platform,
        language: &LanguageCode,
    ) -> &'static [&'static str] {
        platform.caption_suggestions(language)
    }

    /// Recommended posting windows for `platform`.
    pub fn posting_schedule(&self, platform: Platform) -> &'static [&'static str] {
        platform.posting_schedule()
    }
}

fn resolve(name: &str) -> Platform {
    Platform::from_str(name.trim()).unwrap_or_else(|_| {
        warn!(platform = name, "Unknown platform, using TikTok");
        Platform::TikTok
    })
}
