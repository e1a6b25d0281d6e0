//! Tests for settings loading.

use rekakata::{FormatMatching, Platform, RekaErrorKind, Settings};
use std::io::Write;

#[test]
fn test_bundled_defaults() {
    let settings = Settings::bundled().unwrap();

    assert_eq!(settings.log_level, "info");
    assert!(!settings.json_logs);
    assert_eq!(settings.min_input_length, 5);
    assert_eq!(settings.max_input_length, 2000);
    assert_eq!(settings.format_matching, FormatMatching::Literal);
    assert_eq!(settings.generation.model, "llama-3.3-70b-versatile");
    assert_eq!(settings.generation.max_tokens, 2048);
    assert_eq!(
        settings.platform_optimizer().platforms(),
        &[Platform::TikTok, Platform::Instagram, Platform::YouTube]
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "default_platforms = [\"youtube\", \"snapchat\"]\nformat_matching = \"topics\"\n\n[generation]\nmodel = \"small-model\""
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(settings.format_matching, FormatMatching::Topics);
    assert_eq!(settings.generation.model, "small-model");
    assert_eq!(settings.generation.max_tokens, 2048);
    assert_eq!(settings.max_input_length, 2000);
    assert_eq!(
        settings.platform_optimizer().platforms(),
        &[Platform::YouTube, Platform::TikTok]
    );
}

#[test]
fn test_inconsistent_file_is_config_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "min_input_length = 100\nmax_input_length = 10").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), RekaErrorKind::Config(_)));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind(), RekaErrorKind::Config(_)));
}

#[test]
fn test_length_bounds_follow_settings() {
    let settings = Settings {
        min_input_length: 10,
        max_input_length: 20,
        ..Settings::default()
    };
    let bounds = settings.length_bounds();
    assert!(!bounds.contains(9));
    assert!(bounds.contains(20));
    assert!(!bounds.contains(21));
}
