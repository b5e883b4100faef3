use aotyfm::{Error, MetadataCache, ReleaseLookup, Resolver};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::tempdir;
use uuid::Uuid;

#[derive(Default)]
struct Counters {
    year_calls: Cell<usize>,
    cover_calls: Cell<usize>,
}

struct StubLookup {
    year: Option<String>,
    cover_available: bool,
    fail: bool,
    counters: Rc<Counters>,
}

impl StubLookup {
    fn new(year: Option<&str>, cover_available: bool, counters: Rc<Counters>) -> Self {
        StubLookup {
            year: year.map(str::to_string),
            cover_available,
            fail: false,
            counters,
        }
    }
}

impl ReleaseLookup for StubLookup {
    fn release_year(&mut self, _mbid: Uuid) -> aotyfm::Result<Option<String>> {
        self.counters.year_calls.set(self.counters.year_calls.get() + 1);
        if self.fail {
            return Err(Error::Config("service unavailable".to_string()));
        }
        Ok(self.year.clone())
    }

    fn download_cover(&mut self, _mbid: Uuid, dest: &Path) -> aotyfm::Result<Option<PathBuf>> {
        self.counters.cover_calls.set(self.counters.cover_calls.get() + 1);
        if self.fail {
            return Err(Error::Config("service unavailable".to_string()));
        }
        if !self.cover_available {
            return Ok(None);
        }
        fs::write(dest, b"jpeg bytes").unwrap();
        Ok(Some(dest.to_path_buf()))
    }
}

fn empty_cache(dir: &Path) -> MetadataCache {
    let (cache, _) = MetadataCache::load(&dir.join("retrieved_data.json"));
    cache
}

#[test]
fn test_year_cache_hit_skips_network() {
    let dir = tempdir().unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    let mut resolver = Resolver::new(stub, dir.path().join("album_covers"));
    let mut cache = empty_cache(dir.path());

    cache.insert(
        MetadataCache::year_key("Artist A", "Album X"),
        "2019".to_string(),
    );

    let year = resolver.resolve_year(&mut cache, "Artist A", "Album X", Some(Uuid::new_v4()));

    assert_eq!(year.as_deref(), Some("2019"));
    assert_eq!(counters.year_calls.get(), 0);
}

#[test]
fn test_year_cache_miss_fetches_once_and_writes_back() {
    let dir = tempdir().unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    let mut resolver = Resolver::new(stub, dir.path().join("album_covers"));
    let mut cache = empty_cache(dir.path());
    let mbid = Some(Uuid::new_v4());

    let first = resolver.resolve_year(&mut cache, "Artist A", "Album X", mbid);
    let second = resolver.resolve_year(&mut cache, "Artist A", "Album X", mbid);

    assert_eq!(first.as_deref(), Some("2024"));
    assert_eq!(second.as_deref(), Some("2024"));
    assert_eq!(counters.year_calls.get(), 1);
    assert_eq!(
        cache.get(&MetadataCache::year_key("Artist A", "Album X")),
        Some("2024")
    );
}

#[test]
fn test_year_without_mbid_is_absent() {
    let dir = tempdir().unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    let mut resolver = Resolver::new(stub, dir.path().join("album_covers"));
    let mut cache = empty_cache(dir.path());

    let year = resolver.resolve_year(&mut cache, "Artist A", "Album X", None);

    assert_eq!(year, None);
    assert_eq!(counters.year_calls.get(), 0);
}

#[test]
fn test_failed_lookup_not_cached_and_retried() {
    let dir = tempdir().unwrap();
    let counters = Rc::new(Counters::default());
    let mut stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    stub.fail = true;
    let mut resolver = Resolver::new(stub, dir.path().join("album_covers"));
    let mut cache = empty_cache(dir.path());
    let mbid = Some(Uuid::new_v4());

    let first = resolver.resolve_year(&mut cache, "Artist A", "Album X", mbid);
    let second = resolver.resolve_year(&mut cache, "Artist A", "Album X", mbid);

    assert_eq!(first, None);
    assert_eq!(second, None);
    assert_eq!(counters.year_calls.get(), 2);
    assert_eq!(cache.get(&MetadataCache::year_key("Artist A", "Album X")), None);
}

#[test]
fn test_local_cover_file_wins_over_everything() {
    let dir = tempdir().unwrap();
    let covers_dir = dir.path().join("album_covers");
    fs::create_dir_all(&covers_dir).unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    let resolver = Resolver::new(stub, covers_dir.clone());

    let local = resolver.cover_path("Artist A", "Album X");
    fs::write(&local, b"already here").unwrap();

    let mut resolver = resolver;
    let mut cache = empty_cache(dir.path());
    let cover = resolver.resolve_cover(&mut cache, "Artist A", "Album X", Some(Uuid::new_v4()));

    assert_eq!(cover.as_deref(), Some(local.to_str().unwrap()));
    assert_eq!(counters.cover_calls.get(), 0);
    assert_eq!(cache.get(&MetadataCache::cover_key("Artist A", "Album X")), None);
}

#[test]
fn test_cover_downloaded_once_and_cached() {
    let dir = tempdir().unwrap();
    let covers_dir = dir.path().join("album_covers");
    fs::create_dir_all(&covers_dir).unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), true, Rc::clone(&counters));
    let mut resolver = Resolver::new(stub, covers_dir);
    let mut cache = empty_cache(dir.path());
    let mbid = Some(Uuid::new_v4());

    let first = resolver.resolve_cover(&mut cache, "Artist A", "Album X", mbid);
    let second = resolver.resolve_cover(&mut cache, "Artist A", "Album X", mbid);

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(counters.cover_calls.get(), 1);
    assert!(resolver.cover_path("Artist A", "Album X").exists());
    assert!(cache
        .get(&MetadataCache::cover_key("Artist A", "Album X"))
        .is_some());
}

#[test]
fn test_cover_absent_when_service_has_none() {
    let dir = tempdir().unwrap();
    let covers_dir = dir.path().join("album_covers");
    fs::create_dir_all(&covers_dir).unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(Some("2024"), false, Rc::clone(&counters));
    let mut resolver = Resolver::new(stub, covers_dir);
    let mut cache = empty_cache(dir.path());

    let cover = resolver.resolve_cover(&mut cache, "Artist A", "Album X", Some(Uuid::new_v4()));

    assert_eq!(cover, None);
    assert_eq!(cache.get(&MetadataCache::cover_key("Artist A", "Album X")), None);
}

#[test]
fn test_cover_path_is_sanitized() {
    let dir = tempdir().unwrap();
    let counters = Rc::new(Counters::default());
    let stub = StubLookup::new(None, false, counters);
    let resolver = Resolver::new(stub, dir.path().join("album_covers"));

    let path = resolver.cover_path("Björk", "Post / Live");

    assert!(path.to_str().unwrap().ends_with("bjork_post_live.jpg"));
}
