//! Tests for platform optimization.

use rekakata_core::LanguageCode;
use rekakata_platform::{Platform, PlatformOptimizer};

#[test]
fn test_default_targets_every_platform() {
    let optimizer = PlatformOptimizer::default();
    assert_eq!(
        optimizer.platforms(),
        &[Platform::TikTok, Platform::Instagram, Platform::YouTube]
    );
    assert_eq!(optimizer.optimize_all().len(), 3);
}

#[test]
fn test_specs_match_platform_limits() {
    let optimizer = PlatformOptimizer::default();
    let instagram = optimizer.optimize(Platform::Instagram);
    assert_eq!(instagram.max_duration, "90s");
    assert_eq!(instagram.optimal_length, "15-60s");

    for spec in optimizer.optimize_all() {
        assert_eq!(spec.aspect_ratio, "9:16");
        assert_eq!(spec.resolution, "1080x1920");
    }
}

#[test]
fn test_unknown_platform_name_falls_back_to_tiktok() {
    let optimizer = PlatformOptimizer::default();
    assert_eq!(optimizer.optimize_named("snapchat").platform, Platform::TikTok);
    assert_eq!(optimizer.optimize_named(" YouTube ").platform, Platform::YouTube);
}

#[test]
fn test_names_are_deduplicated_in_order() {
    let optimizer = PlatformOptimizer::from_names(["youtube", "tiktok", "YOUTUBE"]);
    assert_eq!(optimizer.platforms(), &[Platform::YouTube, Platform::TikTok]);
}

#[test]
fn test_best_platform_respects_targets() {
    let all = PlatformOptimizer::default();
    assert_eq!(all.best_platform_for("Review"), Platform::YouTube);
    assert_eq!(all.best_platform_for("challenge"), Platform::TikTok);

    let instagram_only = PlatformOptimizer::new(vec![Platform::Instagram]);
    assert_eq!(instagram_only.best_platform_for("vlog"), Platform::Instagram);
    assert_eq!(instagram_only.best_platform_for("challenge"), Platform::TikTok);
    assert_eq!(instagram_only.best_platform_for("cooking"), Platform::Instagram);
}

#[test]
fn test_captions_follow_language() {
    let optimizer = PlatformOptimizer::default();
    let id = optimizer.caption_suggestions(Platform::Instagram, &LanguageCode::indonesian());
    let en = optimizer.caption_suggestions(Platform::Instagram, &LanguageCode::new("fr"));
    assert_eq!(id[0], "Simpan biar nggak lupa! 🔖");
    assert_eq!(en[0], "Save this for later! 🔖");
    assert_eq!(id.len(), 4);
}

#[test]
fn test_posting_schedules() {
    let optimizer = PlatformOptimizer::default();
    assert_eq!(optimizer.posting_schedule(Platform::YouTube).len(), 2);
    assert_eq!(optimizer.posting_schedule(Platform::TikTok)[0], "7:00 AM - 9:00 AM");
}

#[test]
fn test_spec_serializes_with_lowercase_platform() {
    let json = serde_json::to_value(Platform::TikTok.spec()).unwrap();
    assert_eq!(json["platform"], "tiktok");
    assert_eq!(json["max_duration"], "60s");
}
