use aotyfm::{CacheLoad, MetadataCache};
use rustc_hash::FxHashMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retrieved_data.json");

    let (cache, load) = MetadataCache::load(&path);

    assert_eq!(load, CacheLoad::Empty);
    assert!(cache.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retrieved_data.json");

    let (mut cache, _) = MetadataCache::load(&path);
    cache.insert(
        MetadataCache::year_key("Daft Punk", "Discovery"),
        "2001".to_string(),
    );
    cache.insert(
        MetadataCache::cover_key("Daft Punk", "Discovery"),
        "/covers/daft_punk_discovery.jpg".to_string(),
    );
    cache.save().unwrap();

    let (reloaded, load) = MetadataCache::load(&path);

    assert_eq!(load, CacheLoad::Loaded(2));
    assert_eq!(
        reloaded.get(&MetadataCache::year_key("Daft Punk", "Discovery")),
        Some("2001")
    );
    assert_eq!(
        reloaded.get(&MetadataCache::cover_key("Daft Punk", "Discovery")),
        Some("/covers/daft_punk_discovery.jpg")
    );
}

#[test]
fn test_corrupted_file_is_repaired() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retrieved_data.json");
    fs::write(&path, "{ definitely not json").unwrap();

    let (cache, load) = MetadataCache::load(&path);

    assert_eq!(load, CacheLoad::Repaired);
    assert!(cache.is_empty());

    // The broken file was replaced with a valid empty cache
    let contents = fs::read_to_string(&path).unwrap();
    let parsed: FxHashMap<String, String> = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_wrong_shape_is_repaired() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retrieved_data.json");
    fs::write(&path, r#"{"key": 42}"#).unwrap();

    let (_, load) = MetadataCache::load(&path);

    assert_eq!(load, CacheLoad::Repaired);
}

#[test]
fn test_reset_clears_entries_and_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("retrieved_data.json");

    let (mut cache, _) = MetadataCache::load(&path);
    cache.insert("some|album|year".to_string(), "2020".to_string());
    cache.save().unwrap();

    cache.reset().unwrap();
    assert!(cache.is_empty());

    let (reloaded, load) = MetadataCache::load(&path);
    assert_eq!(load, CacheLoad::Loaded(0));
    assert!(reloaded.is_empty());
}

#[test]
fn test_keys_normalize_case() {
    assert_eq!(
        MetadataCache::year_key("Daft Punk", "Discovery"),
        "daft punk|discovery|year"
    );
    assert_eq!(
        MetadataCache::cover_key("DAFT PUNK", "DISCOVERY"),
        "daft punk|discovery|cover"
    );
}
