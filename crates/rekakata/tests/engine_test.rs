//! Tests for end-to-end prompt generation with a scripted driver.

use async_trait::async_trait;
use rekakata::{
    CatalogData, ExportErrorKind, ExportFormat, GenerationDriver, GenerationError,
    GenerationErrorKind, GenerationRequest, Platform, PromptEngine, PromptPipeline, RekaErrorKind,
    RekaResult, ScriptField, Settings, TrendingCatalog, VisualField, system_prompt,
};
use parking_lot::Mutex;
use std::sync::Arc;

const RESPONSE: &str = r#"# MASTER PROMPT
"Close-up of a teenager applying serum in soft morning light, handheld camera."

# VISUAL SPECIFICATIONS

| Element | Description |
|---------|-------------|
| Style | Clean minimalist |
| Camera | Handheld close-up |
| Mood | Fresh |

# SCRIPT

## Hook [0:00-0:03]
Kulit kusam? Tunggu dulu!

## Body [0:03-0:45]
Pakai serum ini setiap pagi.

## CTA [0:45-0:60]
Follow untuk tips lainnya!

# HASHTAGS
#skincare #glowup #fyp
"#;

/// Driver returning a fixed reply and recording every request.
struct ScriptedDriver {
    reply: Option<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedDriver {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerationDriver for ScriptedDriver {
    async fn generate(&self, request: &GenerationRequest) -> RekaResult<String> {
        self.requests.lock().push(request.clone());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::new(GenerationErrorKind::Driver {
                model: "scripted".to_string(),
                message: "connection reset".to_string(),
            })
            .into()),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn engine(driver: ScriptedDriver, output_dir: &std::path::Path) -> PromptEngine<ScriptedDriver> {
    let settings = Settings::default();
    let catalog = Arc::new(TrendingCatalog::in_memory(CatalogData::fallback()));
    let pipeline = PromptPipeline::with_catalog(&settings, catalog);
    PromptEngine::from_pipeline(driver, pipeline, output_dir)
}

#[tokio::test]
async fn test_generate_structures_response() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying(RESPONSE), dir.path());

    let generated = engine
        .generate(
            "Review skincare untuk remaja yang punya kulit berminyak dan kusam",
            &[Platform::TikTok],
        )
        .await
        .unwrap();

    let structured = generated.structured();
    assert_eq!(
        structured.master_prompt().as_deref(),
        Some("Close-up of a teenager applying serum in soft morning light, handheld camera.")
    );
    assert_eq!(
        structured.visual_specs().get(VisualField::Style),
        Some("Clean minimalist")
    );
    assert_eq!(
        structured.script().get(ScriptField::Cta),
        Some("Follow untuk tips lainnya!")
    );
    assert_eq!(structured.hashtags(), &vec!["skincare", "glowup", "fyp"]);
    assert_eq!(structured.raw_response(), RESPONSE);

    assert_eq!(generated.platforms(), &vec![Platform::TikTok]);
    assert!(generated.markdown().contains("TikTok"));
    assert!(!generated.markdown().contains("YouTube Shorts"));
}

#[tokio::test]
async fn test_request_carries_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying(RESPONSE), dir.path());

    engine
        .generate("Tutorial makeup natural untuk remaja", &[])
        .await
        .unwrap();

    let last = engine.last_generated().unwrap();
    let requests = engine.driver().requests.lock();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.system_prompt, system_prompt(last.structured().language()));
    assert!(request.user_prompt.contains("# User Input:\nTutorial makeup natural untuk remaja"));
    assert!(request.user_prompt.contains("- topics: tutorial"));
    assert!(request.user_prompt.contains("## TikTok:"));
    assert!(request.user_prompt.contains("## Instagram Reels:"));
    assert!(request.user_prompt.contains("## YouTube Shorts:"));
    assert_eq!(request.model, "llama-3.3-70b-versatile");
    assert_eq!(request.max_tokens, 2048);
}

#[tokio::test]
async fn test_invalid_input_skips_driver() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying(RESPONSE), dir.path());

    let err = engine.generate("<b>hi</b>", &[]).await.unwrap_err();

    assert!(err.is_validation());
    assert!(engine.driver().requests.lock().is_empty());
    assert!(engine.last_generated().is_none());
}

#[tokio::test]
async fn test_driver_failure_is_generation_error() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::failing(), dir.path());

    let err = engine
        .generate("Unboxing sepatu lari terbaru", &[])
        .await
        .unwrap_err();

    assert!(!err.is_validation());
    assert!(matches!(err.kind(), RekaErrorKind::Generation(_)));
    assert!(engine.last_generated().is_none());
}

#[tokio::test]
async fn test_blank_response_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying("  \n\t "), dir.path());

    let err = engine
        .generate("Unboxing sepatu lari terbaru", &[])
        .await
        .unwrap_err();

    match err.kind() {
        RekaErrorKind::Generation(e) => {
            assert_eq!(e.kind, GenerationErrorKind::EmptyResponse("scripted".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_failure_keeps_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let good = engine(ScriptedDriver::replying(RESPONSE), dir.path());
    good.generate("Unboxing sepatu lari terbaru", &[]).await.unwrap();
    assert!(good.generate("hi", &[]).await.is_err());

    let last = good.last_generated().unwrap();
    assert_eq!(last.structured().raw_response(), RESPONSE);
}

#[test]
fn test_export_before_generation_fails() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying(RESPONSE), dir.path());

    let err = engine.export_last(ExportFormat::Markdown, None).unwrap_err();
    match err.kind() {
        RekaErrorKind::Export(e) => assert_eq!(e.kind, ExportErrorKind::NothingGenerated),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_export_writes_markdown_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine(ScriptedDriver::replying(RESPONSE), dir.path());
    let generated = engine
        .generate("Unboxing sepatu lari terbaru", &[])
        .await
        .unwrap();

    let md_path = engine.export_last(ExportFormat::Markdown, None).unwrap();
    assert_eq!(md_path.parent(), Some(dir.path()));
    let name = md_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("prompt_"));
    assert!(name.ends_with(".md"));
    assert_eq!(std::fs::read_to_string(&md_path).unwrap(), *generated.markdown());

    let other = tempfile::tempdir().unwrap();
    let json_path = engine
        .export_last(ExportFormat::Json, Some(other.path()))
        .unwrap();
    assert_eq!(json_path.extension().unwrap(), "json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["visual_specifications"]["Style"], "Clean minimalist");
    assert_eq!(value["script"]["hook"], "Kulit kusam? Tunggu dulu!");
    assert_eq!(value["raw_response"], RESPONSE);
}
