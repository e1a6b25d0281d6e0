//! Builds the generation request from analysed input.

use crate::{GenerationRequest, GenerationSettings};
use rekakata_core::{EntitySet, LanguageCode, TrendingBundle};
use rekakata_platform::PlatformSpec;
use std::fmt::Write;

/// Hooks quoted in the request.
const PROMPT_HOOKS: usize = 3;
/// Hashtags quoted in the request.
const PROMPT_HASHTAGS: usize = 10;

const SYSTEM_PROMPT_ID: &str = "Anda adalah asisten AI yang ahli dalam membuat prompt text-to-video berkualitas tinggi untuk konten UGC (User Generated Content).

Tugas Anda:
1. Analisis input pengguna dan buat prompt yang detail dan spesifik
2. Sertakan spesifikasi visual (style, camera, lighting, aspect ratio, mood)
3. Buat script yang terstruktur (Hook, Body, CTA)
4. Optimalkan untuk platform media sosial (TikTok/Instagram/YouTube)
5. Sertakan hashtag yang relevan

Format output yang diharapkan:
- MASTER PROMPT untuk AI video generator (RunwayML/Pika/Kling)
- VISUAL SPECIFICATIONS dalam format tabel
- SCRIPT dengan pembagian Hook [0:00-0:03], Body [0:03-0:45], CTA [0:45-0:60]
- PLATFORM OPTIMIZATION untuk TikTok, Instagram Reels, YouTube Shorts
- HASHTAGS yang relevan dan trending

Pastikan prompt:
- Spesifik dan detail
- Mudah dipahami oleh AI video generator
- Mengikuti tren terkini
- Sesuai dengan bahasa input pengguna";

const SYSTEM_PROMPT_EN: &str = "You are an AI assistant expert in creating high-quality text-to-video prompts for UGC (User Generated Content).

Your tasks:
1. Analyze user input and create detailed, specific prompts
2. Include visual specifications (style, camera, lighting, aspect ratio, mood)
3. Create structured scripts (Hook, Body, CTA)
4. Optimize for social media platforms (TikTok/Instagram/YouTube)
5. Include relevant hashtags

Expected output format:
- MASTER PROMPT for AI video generator (RunwayML/Pika/Kling)
- VISUAL SPECIFICATIONS in table format
- SCRIPT with Hook [0:00-0:03], Body [0:03-0:45], CTA [0:45-0:60]
- PLATFORM OPTIMIZATION for TikTok, Instagram Reels, YouTube Shorts
- HASHTAGS that are relevant and trending

Ensure prompts are:
- Specific and detailed
- Easy for AI video generators to understand
- Following current trends
- In the same language as user input";

const CLOSING_INSTRUCTION: &str = "\nBased on the information above, generate a complete, detailed, and optimized prompt for text-to-video generation following the specified format.";

/// System prompt for `language`: Indonesian for `id`, English otherwise.
pub fn system_prompt(language: &LanguageCode) -> &'static str {
    if language.is_indonesian() {
        SYSTEM_PROMPT_ID
    } else {
        SYSTEM_PROMPT_EN
    }
}

/// User prompt describing the idea and everything selected for it.
///
/// Sections with nothing to say are left out.
pub fn user_prompt(
    input: &str,
    entities: &EntitySet,
    bundle: &TrendingBundle,
    platforms: &[&PlatformSpec],
) -> String {
    let mut parts = vec![format!("# User Input:\n{}\n", input)];

    if !entities.is_empty() {
        let lines: Vec<String> = entities
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(category, values)| {
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                format!("- {}: {}", category, values.join(", "))
            })
            .collect();
        parts.push(format!("# Detected Entities:\n{}\n", lines.join("\n")));
    }

    let trending = trending_section(bundle);
    if !trending.is_empty() {
        parts.push(format!("# Trending Elements:\n{}\n", trending));
    }

    if !platforms.is_empty() {
        let mut text = String::new();
        for spec in platforms {
            // Writing to a String cannot fail
            let _ = write!(
                text,
                "\n## {}:\n- Aspect Ratio: {}\n- Characteristics: {}\n- Optimal Length: {}",
                spec.platform.display_name(),
                spec.aspect_ratio,
                spec.characteristics,
                spec.optimal_length
            );
        }
        parts.push(format!("# Platform Specifics:\n{}\n", text));
    }

    parts.push(CLOSING_INSTRUCTION.to_string());
    parts.join("\n")
}

fn trending_section(bundle: &TrendingBundle) -> String {
    let mut lines = Vec::new();

    if let Some(format) = bundle.format() {
        lines.push(format!("- Format: {}", format.name));
    }
    if let Some(style) = bundle.visual_style() {
        lines.push(format!("- Visual Style: {} ({})", style.name, style.style));
    }
    if !bundle.hooks().is_empty() {
        let hooks: Vec<&str> = bundle
            .hooks()
            .iter()
            .take(PROMPT_HOOKS)
            .map(String::as_str)
            .collect();
        lines.push(format!("- Example Hooks: {}", hooks.join(", ")));
    }
    if !bundle.hashtags().is_empty() {
        let tags: Vec<&str> = bundle
            .hashtags()
            .iter()
            .take(PROMPT_HASHTAGS)
            .map(String::as_str)
            .collect();
        lines.push(format!("- Hashtags: {}", tags.join(", ")));
    }

    lines.join("\n")
}

/// Assembles [`GenerationRequest`]s with fixed sampling parameters.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    generation: GenerationSettings,
}

impl PromptBuilder {
    /// Builder using `generation` parameters.
    pub fn new(generation: GenerationSettings) -> Self {
        Self { generation }
    }

    /// Sampling parameters applied to every request.
    pub fn generation(&self) -> &GenerationSettings {
        &self.generation
    }

    /// Request for one analysed idea.
    pub fn build(
        &self,
        input: &str,
        language: &LanguageCode,
        entities: &EntitySet,
        bundle: &TrendingBundle,
        platforms: &[&PlatformSpec],
    ) -> GenerationRequest {
        GenerationRequest {
            system_prompt: system_prompt(language).to_string(),
            user_prompt: user_prompt(input, entities, bundle, platforms),
            model: self.generation.model.clone(),
            temperature: self.generation.temperature,
            max_tokens: self.generation.max_tokens,
        }
    }
}
