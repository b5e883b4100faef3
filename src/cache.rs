//! Persistent metadata cache backed by a single JSON file.
//!
//! Successful MusicBrainz lookups are remembered across runs, so albums
//! already resolved never hit the network again. Failed lookups are not
//! recorded and get retried on the next run.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened while reading the cache file from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLoad {
    /// No cache file existed yet.
    Empty,
    /// Entries were loaded from disk.
    Loaded(usize),
    /// The file was unreadable or corrupted and has been replaced with an empty cache.
    Repaired,
}

pub struct MetadataCache {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl MetadataCache {
    /// Read the cache file, repairing it in place when corrupted.
    ///
    /// Corruption is never fatal: the broken file is atomically replaced
    /// with an empty cache and the caller gets [`CacheLoad::Repaired`]
    /// so it can warn the user.
    pub fn load(path: &Path) -> (Self, CacheLoad) {
        let mut cache = Self {
            path: path.to_path_buf(),
            entries: FxHashMap::default(),
        };

        if !path.exists() {
            return (cache, CacheLoad::Empty);
        }

        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str::<FxHashMap<String, String>>(&contents).ok());

        match parsed {
            Some(entries) => {
                let count = entries.len();
                cache.entries = entries;
                (cache, CacheLoad::Loaded(count))
            }
            None => {
                // Best effort: if even the repair write fails, the empty
                // in-memory cache still lets the run proceed.
                let _ = cache.save();
                (cache, CacheLoad::Repaired)
            }
        }
    }

    /// Write all entries to disk, via a temp file and atomic rename.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(&self.entries)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serialized)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Drop every entry and persist the now-empty cache.
    pub fn reset(&mut self) -> crate::Result<()> {
        self.entries.clear();
        self.save()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cache key for an album's release year.
    pub fn year_key(artist: &str, album: &str) -> String {
        format!("{}|{}|year", artist.to_lowercase(), album.to_lowercase())
    }

    /// Cache key for an album's cover art reference.
    pub fn cover_key(artist: &str, album: &str) -> String {
        format!("{}|{}|cover", artist.to_lowercase(), album.to_lowercase())
    }
}
