//! Tests for catalog loading, fallback and updates.

use rekakata_error::CatalogErrorKind;
use rekakata_trending::{CatalogData, TrendingCatalog};
use serde_json::json;
use std::sync::{Arc, Barrier};
use std::thread;

fn sample_document() -> serde_json::Value {
    json!({
        "formats": [
            {"name": "GRWM", "platforms": ["tiktok"], "keywords": ["grwm", "makeup"]}
        ],
        "visual_styles": [
            {"name": "Soft Glam", "keywords": ["skincare"], "style": "pastel", "camera": "macro"}
        ],
        "hooks": ["Wait for it...", "POV: kamu baru sadar"],
        "cta": ["Comment di bawah!"],
        "hashtags": {"general": ["#fyp"], "skincare": ["#glowup"]},
        "sounds": [{"name": "Espresso", "artist": "Sabrina Carpenter"}]
    })
}

#[test]
fn test_missing_file_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = TrendingCatalog::new(dir.path().join("missing.json"));
    assert_eq!(*catalog.snapshot(), CatalogData::fallback());
}

#[test]
fn test_malformed_file_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trending.json");
    std::fs::write(&path, "{ not json").unwrap();

    let catalog = TrendingCatalog::new(&path);
    assert_eq!(*catalog.snapshot(), CatalogData::fallback());
}

#[test]
fn test_document_without_general_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trending.json");
    std::fs::write(&path, r##"{"hashtags": {"food": ["#yum"]}}"##).unwrap();

    let catalog = TrendingCatalog::new(&path);
    assert_eq!(*catalog.snapshot(), CatalogData::fallback());
}

#[test]
fn test_valid_file_is_loaded_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trending.json");
    std::fs::write(&path, sample_document().to_string()).unwrap();

    let catalog = TrendingCatalog::new(&path);
    let first = catalog.snapshot();
    assert_eq!(first.formats()[0].name, "GRWM");
    assert_eq!(first.sounds()[0].name.as_deref(), Some("Espresso"));
    assert_eq!(first.sounds()[0].attributes["artist"], "Sabrina Carpenter");

    std::fs::remove_file(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &catalog.snapshot()));
}

#[test]
fn test_update_merges_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("trending.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, sample_document().to_string()).unwrap();

    let catalog = TrendingCatalog::new(&path);
    let before = catalog.snapshot();

    let updated = catalog
        .update(json!({
            "hooks": ["Fresh hook"],
            "hashtags": {"food": ["#kuliner"]}
        }))
        .unwrap();

    assert_eq!(updated.hooks(), &vec!["Fresh hook".to_string()]);
    assert_eq!(updated.hashtags()["skincare"], vec!["#glowup"]);
    assert_eq!(updated.hashtags()["food"], vec!["#kuliner"]);
    assert_eq!(updated.formats(), before.formats());

    // Earlier snapshots are unaffected.
    assert_eq!(before.hooks().len(), 2);

    let reloaded = TrendingCatalog::new(&path).snapshot();
    assert_eq!(*reloaded, *updated);
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("cta").is_some());
}

#[test]
fn test_update_on_fallback_persists_new_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trending.json");
    let catalog = TrendingCatalog::new(&path);

    catalog.update(json!({"cta": ["Share ke temanmu!"]})).unwrap();

    let reloaded = TrendingCatalog::new(&path).snapshot();
    assert_eq!(reloaded.ctas(), &vec!["Share ke temanmu!".to_string()]);
    assert_eq!(reloaded.formats().len(), 2);
}

#[test]
fn test_invalid_update_leaves_catalog_unchanged() {
    let catalog = TrendingCatalog::in_memory(CatalogData::fallback());

    let err = catalog.update(json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err.kind, CatalogErrorKind::Merge(_)));

    let err = catalog
        .update(json!({"hashtags": {"general": "#fyp"}}))
        .unwrap_err();
    assert!(matches!(err.kind, CatalogErrorKind::Parse(_)));

    assert_eq!(*catalog.snapshot(), CatalogData::fallback());
}

#[test]
fn test_readers_see_whole_catalogs_during_update() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trending.json");
    std::fs::write(&path, sample_document().to_string()).unwrap();

    let catalog = TrendingCatalog::new(&path);
    let before = catalog.snapshot();
    let readers = 4;
    let start = Barrier::new(readers + 1);

    let (catalog, start) = (&catalog, &start);
    let (updated, seen) = thread::scope(|scope| {
        let handles: Vec<_> = (0..readers)
            .map(|_| {
                scope.spawn(move || {
                    start.wait();
                    (0..500).map(|_| catalog.snapshot()).collect::<Vec<_>>()
                })
            })
            .collect();

        start.wait();
        let updated = catalog
            .update(json!({
                "hooks": ["Fresh hook", "Another one"],
                "cta": ["Save dulu!"],
                "hashtags": {"food": ["#kuliner"]}
            }))
            .unwrap();

        let seen: Vec<Arc<CatalogData>> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        (updated, seen)
    });

    assert_ne!(*before, *updated);
    for snapshot in &seen {
        assert!(
            **snapshot == *before || **snapshot == *updated,
            "reader saw a partial catalog: {snapshot:?}"
        );
    }

    let persisted = CatalogData::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(*catalog.snapshot(), persisted);
    assert_eq!(persisted, *updated);
}
