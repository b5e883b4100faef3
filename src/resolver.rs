//! Cache-first resolution of release years and cover art.
//!
//! Order of precedence for covers: a file already on disk wins, then
//! the cache, then the network. Years check the cache before the
//! network. Lookup failures degrade to "absent" and are left out of
//! the cache so the next run retries them.

use std::path::PathBuf;
use uuid::Uuid;

use crate::cache::MetadataCache;
use crate::musicbrainz::ReleaseLookup;
use crate::string_normalization::sanitize_for_filename;

pub struct Resolver<L> {
    lookup: L,
    covers_dir: PathBuf,
}

impl<L: ReleaseLookup> Resolver<L> {
    pub fn new(lookup: L, covers_dir: PathBuf) -> Self {
        Resolver { lookup, covers_dir }
    }

    /// Release year for an album, from cache or MusicBrainz.
    pub fn resolve_year(
        &mut self,
        cache: &mut MetadataCache,
        artist: &str,
        album: &str,
        mbid: Option<Uuid>,
    ) -> Option<String> {
        let key = MetadataCache::year_key(artist, album);
        if let Some(year) = cache.get(&key) {
            return Some(year.to_string());
        }

        let mbid = mbid?;
        match self.lookup.release_year(mbid) {
            Ok(Some(year)) => {
                cache.insert(key, year.clone());
                Some(year)
            }
            Ok(None) | Err(_) => None,
        }
    }

    /// Cover art reference for an album, from disk, cache or the
    /// Cover Art Archive.
    pub fn resolve_cover(
        &mut self,
        cache: &mut MetadataCache,
        artist: &str,
        album: &str,
        mbid: Option<Uuid>,
    ) -> Option<String> {
        let local_path = self.cover_path(artist, album);
        if local_path.exists() {
            return Some(local_path.to_string_lossy().into_owned());
        }

        let key = MetadataCache::cover_key(artist, album);
        if let Some(cover) = cache.get(&key) {
            return Some(cover.to_string());
        }

        let mbid = mbid?;
        match self.lookup.download_cover(mbid, &local_path) {
            Ok(Some(path)) => {
                let reference = path.to_string_lossy().into_owned();
                cache.insert(key, reference.clone());
                Some(reference)
            }
            Ok(None) | Err(_) => None,
        }
    }

    /// Where an album's cover lives on disk.
    pub fn cover_path(&self, artist: &str, album: &str) -> PathBuf {
        self.covers_dir.join(format!(
            "{}_{}.jpg",
            sanitize_for_filename(artist),
            sanitize_for_filename(album)
        ))
    }
}
