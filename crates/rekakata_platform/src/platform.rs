//! Supported platforms and their specifications.

use rekakata_core::LanguageCode;
use serde::{Deserialize, Serialize};

/// Short-form video platform.
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
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    /// TikTok
    TikTok,
    /// Instagram Reels
    Instagram,
    /// YouTube Shorts
    YouTube,
}

impl Platform {
    /// Human-readable product name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram Reels",
            Platform::YouTube => "YouTube Shorts",
        }
    }

    /// Publishing specification.
    pub fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::TikTok => &TIKTOK,
            Platform::Instagram => &INSTAGRAM,
            Platform::YouTube => &YOUTUBE,
        }
    }

    /// Caption ideas, Indonesian for `id` and English otherwise.
    pub fn caption_suggestions(self, language: &LanguageCode) -> &'static [&'static str] {
        match (self, language.is_indonesian()) {
            (Platform::TikTok, true) => &[
                "Gak nyangka bisa se-viral ini! 🤯",
                "Wajib coba sebelum nyesel!",
                "Share ke temen kamu yang butuh ini! 👯",
                "Ini dia rahasianya! ✨",
            ],
            (Platform::Instagram, true) => &[
                "Simpan biar nggak lupa! 🔖",
                "Kamu pernah coba ini? Drop di komen! 💬",
                "Tag temen yang wajib tau ini! 👇",
                "Double tap kalau suka! ❤️",
            ],
            (Platform::YouTube, true) => &[
                "Subscribe buat konten seru lainnya! 🔔",
                "Nyesel baru tau sekarang! 😅",
                "Yang masih belum tau, angkat tangan! 🙋",
                "Share ke yang belum tahu! 📢",
            ],
            (Platform::TikTok, false) => &[
                "Can't believe how viral this got! 🤯",
                "Must try before you regret it!",
                "Share with a friend who needs this! 👯",
                "Here's the secret! ✨",
            ],
            (Platform::Instagram, false) => &[
                "Save this for later! 🔖",
                "Have you tried this? Drop a comment! 💬",
                "Tag a friend who needs to know this! 👇",
                "Double tap if you like it! ❤️",
            ],
            (Platform::YouTube, false) => &[
                "Subscribe for more content like this! 🔔",
                "Can't believe I just found out! 😅",
                "Raise your hand if you didn't know! 🙋",
                "Share with someone who doesn't know yet! 📢",
            ],
        }
    }

    /// Recommended posting windows.
    pub fn posting_schedule(self) -> &'static [&'static str] {
        match self {
            Platform::TikTok => &["7:00 AM - 9:00 AM", "12:00 PM - 3:00 PM", "7:00 PM - 11:00 PM"],
            Platform::Instagram => &["11:00 AM", "7:00 PM", "9:00 PM"],
            Platform::YouTube => &["2:00 PM - 4:00 PM", "7:00 PM - 10:00 PM"],
        }
    }
}

/// Publishing specification and production advice for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformSpec {
    /// Platform described
    pub platform: Platform,
    /// Frame aspect ratio
    pub aspect_ratio: &'static str,
    /// Longest allowed clip
    pub max_duration: &'static str,
    /// Recommended resolution
    pub resolution: &'static str,
    /// What performs well on the platform
    pub characteristics: &'static str,
    /// Clip length that performs best
    pub optimal_length: &'static str,
    /// Caption advice
    pub caption_style: &'static str,
    /// Audio advice
    pub music_suggestion: &'static str,
    /// Editing advice
    pub editing_tips: &'static str,
    /// Peak posting hours
    pub posting_time: &'static str,
}

static TIKTOK: PlatformSpec = PlatformSpec {
    platform: Platform::TikTok,
    aspect_ratio: "9:16",
    max_duration: "60s",
    resolution: "1080x1920",
    characteristics: "fast-paced, energetic, trending sounds, hook in first 3 seconds",
    optimal_length: "15-30s",
    caption_style: "catchy, short, include trending hashtags",
    music_suggestion: "Use trending sounds from TikTok library",
    editing_tips: "Quick cuts, text overlays, green screen effects",
    posting_time: "Peak hours: 7-9 AM, 12-3 PM, 7-11 PM",
};

static INSTAGRAM: PlatformSpec = PlatformSpec {
    platform: Platform::Instagram,
    aspect_ratio: "9:16",
    max_duration: "90s",
    resolution: "1080x1920",
    characteristics: "high production quality, aesthetic, saveable content, carousel ready",
    optimal_length: "15-60s",
    caption_style: "engaging, include questions for engagement",
    music_suggestion: "Use trending Instagram Reels audio",
    editing_tips: "High quality, smooth transitions, aesthetic",
    posting_time: "Peak hours: 11 AM, 7 PM, 9 PM",
};

static YOUTUBE: PlatformSpec = PlatformSpec {
    platform: Platform::YouTube,
    aspect_ratio: "9:16",
    max_duration: "60s",
    resolution: "1080x1920",
    characteristics: "engaging, teaser for longer content, subscribe CTA",
    optimal_length: "30-60s",
    caption_style: "informative, include subscribe reminder",
    music_suggestion: "Use royalty-free or trending Shorts audio",
    editing_tips: "Engaging hook, subscribe CTA at end",
    posting_time: "Peak hours: 2-4 PM, 7-10 PM",
};
