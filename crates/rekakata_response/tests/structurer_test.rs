//! Tests for structuring generated text.

use rekakata_core::{LanguageCode, ScriptField, TrendingBundle, VisualField, VisualSpecs};
use rekakata_response::ResponseStructurer;

fn bundle() -> TrendingBundle {
    let hashtags = (0..20).map(|i| format!("#trend{i}")).collect();
    TrendingBundle::new(None, None, vec![], vec![], hashtags, vec![])
}

fn structure(text: &str) -> rekakata_core::StructuredPrompt {
    ResponseStructurer::new().structure(text, &bundle(), LanguageCode::english())
}

const FULL_RESPONSE: &str = r#"# MASTER PROMPT
"A vertical close-up of a young woman applying serum in soft morning light,"
"dewy skin, pastel bathroom, handheld camera."

---

# VISUAL SPECIFICATIONS

| Element | Description |
|---------|-------------|
| Style | Soft glam, pastel |
| Camera | Handheld close-up |
| Lighting | Natural window light |
| Aspect Ratio | 9:16 |
| Mood | Calm, fresh |

# SCRIPT

## Hook [0:00-0:03]
"Stop! Kulit kusam? Coba ini."

## Body [0:03-0:45]
Step 1: cleanse.
Step 2: serum, three drops.

## CTA [0:45-0:60]
Follow for part 2!

# PLATFORM OPTIMIZATION
- TikTok: trending sound

# HASHTAGS
#skincare #glowup #fyp
"#;

#[test]
fn test_full_response() {
    let prompt = structure(FULL_RESPONSE);

    assert_eq!(
        prompt.master_prompt().as_deref(),
        Some("A vertical close-up of a young woman applying serum in soft morning light, dewy skin, pastel bathroom, handheld camera.")
    );

    let specs = prompt.visual_specs();
    assert_eq!(specs.get(VisualField::Style), Some("Soft glam, pastel"));
    assert_eq!(specs.get(VisualField::Lighting), Some("Natural window light"));
    assert_eq!(specs.get(VisualField::Mood), Some("Calm, fresh"));

    let script = prompt.script();
    assert_eq!(script.get(ScriptField::Hook), Some("Stop! Kulit kusam? Coba ini."));
    assert_eq!(
        script.get(ScriptField::Body),
        Some("Step 1: cleanse.\nStep 2: serum, three drops.")
    );
    assert_eq!(script.get(ScriptField::Cta), Some("Follow for part 2!"));

    assert_eq!(prompt.hashtags(), &vec!["skincare", "glowup", "fyp"]);
    assert_eq!(prompt.raw_response(), FULL_RESPONSE);
}

#[test]
fn test_empty_text_degrades_to_defaults() {
    let prompt = structure("");
    assert_eq!(prompt.master_prompt(), &None);
    assert_eq!(prompt.visual_specs(), &VisualSpecs::default());
    assert!(prompt.script().is_empty());
    assert_eq!(prompt.hashtags().len(), 15);
    assert_eq!(prompt.hashtags()[0], "#trend0");
    assert_eq!(prompt.language(), &LanguageCode::english());
}

#[test]
fn test_plain_headings_with_time_ranges() {
    let text = "SCRIPT\n## Hook [0:00-0:03]\nX\n\n## Body [0:03-0:45]\nY\n\n## CTA [0:45-0:60]\nZ";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), Some("X"));
    assert_eq!(script.get(ScriptField::Body), Some("Y"));
    assert_eq!(script.get(ScriptField::Cta), Some("Z"));
}

#[test]
fn test_bold_headings_without_cta() {
    let text = "# SCRIPT\n## **Hook** ...\nA\n\n## **Body** ...\nB";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), Some("A"));
    assert_eq!(script.get(ScriptField::Body), Some("B"));
    assert_eq!(script.get(ScriptField::Cta), None);
}

#[test]
fn test_inline_emphasized_headings() {
    let text = "**SCRIPT:**\n**Hook (0-3 detik):** \"Kamu wajib tahu ini!\"\n**Body (3-45 detik):** Tunjukkan before-after.\n**Call to Action:** Save video ini!";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), Some("Kamu wajib tahu ini!"));
    assert_eq!(script.get(ScriptField::Body), Some("Tunjukkan before-after."));
    assert_eq!(script.get(ScriptField::Cta), Some("Save video ini!"));
}

#[test]
fn test_numbered_headings() {
    let text = "Script outline\n1. Hook\nOpen on the product.\n2. Body\nDemo the texture.\n3. CTA\nLink in bio.";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), Some("Open on the product."));
    assert_eq!(script.get(ScriptField::Body), Some("Demo the texture."));
    assert_eq!(script.get(ScriptField::Cta), Some("Link in bio."));
}

#[test]
fn test_upper_case_triple_emphasis() {
    let text = "### SCRIPT\n***HOOK***\nWow.\n***BODY***\nDetails.\n***CTA***\nFollow.";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), Some("Wow."));
    assert_eq!(script.get(ScriptField::Body), Some("Details."));
    assert_eq!(script.get(ScriptField::Cta), Some("Follow."));
}

#[test]
fn test_hook_keeps_subheadings() {
    let text = "# SCRIPT\n## Hook [0:00-0:03]\n### Visual\nClose-up of serum\n### Voiceover\nStop scrolling!\n\n## Body [0:03-0:45]\nThree steps.\n\n## CTA [0:45-0:60]\nFollow!";
    let script = structure(text).script().clone();
    let hook = script.get(ScriptField::Hook).unwrap();
    assert!(hook.contains("Close-up of serum"));
    assert!(hook.contains("Stop scrolling!"));
    assert!(!hook.contains("Three steps."));
    assert_eq!(script.get(ScriptField::Body), Some("Three steps."));
    assert_eq!(script.get(ScriptField::Cta), Some("Follow!"));
}

#[test]
fn test_empty_section_stays_absent() {
    let text = "# SCRIPT\n## Hook\n\"\"\n## Body\nContent";
    let script = structure(text).script().clone();
    assert_eq!(script.get(ScriptField::Hook), None);
    assert_eq!(script.get(ScriptField::Body), Some("Content"));
}

#[test]
fn test_script_requires_marker() {
    let text = "## Hook\nX\n## Body\nY";
    assert!(structure(text).script().is_empty());
}

#[test]
fn test_visual_table_partial() {
    let text = "## Visual Specifications\n| Style | Cinematic |\n| Camera | Close-up |\n";
    let specs = structure(text).visual_specs().clone();
    assert_eq!(specs.get(VisualField::Style), Some("Cinematic"));
    assert_eq!(specs.get(VisualField::Camera), Some("Close-up"));
    assert_eq!(specs.get(VisualField::Lighting), None);
    assert_eq!(specs.get(VisualField::AspectRatio), Some("9:16"));
}

#[test]
fn test_hashtag_section() {
    let prompt = structure("# HASHTAGS\n#skincare #fyp");
    assert_eq!(prompt.hashtags(), &vec!["skincare", "fyp"]);
}

#[test]
fn test_windows_line_endings() {
    let text = "# MASTER PROMPT\r\nA prompt\r\n# SCRIPT\r\n## Hook\r\nH\r\n## CTA\r\nC\r\n";
    let prompt = structure(text);
    assert_eq!(prompt.master_prompt().as_deref(), Some("A prompt"));
    assert_eq!(prompt.script().get(ScriptField::Hook), Some("H"));
    assert_eq!(prompt.script().get(ScriptField::Cta), Some("C"));
    assert_eq!(prompt.raw_response(), text);
}

#[test]
fn test_arbitrary_text_never_panics() {
    let inputs = [
        "|||",
        "# \n## \n### ",
        "SCRIPT ** ** __ __ [ ] ( )",
        "HASHTAGS\n#\n# \n##",
        "VISUAL\n| | |\n|Style|",
        "ℌ𝔬𝔬𝔨 — ✨ SCRIPT hook: – —",
        "1. 2. 3.\nscript\nhook\nbody\ncta",
    ];
    for input in inputs {
        let _ = structure(input);
    }
}
