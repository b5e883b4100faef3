use rustc_hash::FxHashSet;
use std::fmt;

use crate::aggregate::AlbumPlays;
use crate::cache::MetadataCache;
use crate::musicbrainz::ReleaseLookup;
use crate::resolver::Resolver;
use crate::utils::format_number;

/// Why an album was left off the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unretrievable {
    /// No release year could be found anywhere.
    MissingYear,
    /// A year was found but it is not the target year.
    WrongYear(String),
    /// Year checks out, but no cover art could be found.
    MissingCover,
}

impl fmt::Display for Unretrievable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unretrievable::MissingYear => write!(f, "no release year found"),
            Unretrievable::WrongYear(year) => write!(f, "released in {}", year),
            Unretrievable::MissingCover => write!(f, "no cover art found"),
        }
    }
}

/// An album that cleared every bar: played, released in the target
/// year, and with cover art in hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlbum {
    pub artist: String,
    pub album: String,
    pub year: String,
    pub count: u64,
    pub cover: String,
}

/// Resolve one aggregated album and decide whether it belongs on the
/// list for `target_year`.
///
/// Both the year and the cover must resolve. Years that fail to parse
/// are treated the same as mismatched ones.
pub fn evaluate_album<L: ReleaseLookup>(
    plays: &AlbumPlays,
    target_year: i32,
    resolver: &mut Resolver<L>,
    cache: &mut MetadataCache,
) -> Result<ResolvedAlbum, Unretrievable> {
    let year = resolver
        .resolve_year(cache, &plays.artist, &plays.album, plays.album_mbid)
        .ok_or(Unretrievable::MissingYear)?;

    let matches_target = year
        .trim()
        .parse::<i32>()
        .map(|parsed| parsed == target_year)
        .unwrap_or(false);
    if !matches_target {
        return Err(Unretrievable::WrongYear(year));
    }

    let cover = resolver
        .resolve_cover(cache, &plays.artist, &plays.album, plays.album_mbid)
        .ok_or(Unretrievable::MissingCover)?;

    Ok(ResolvedAlbum {
        artist: plays.artist.clone(),
        album: plays.album.clone(),
        year,
        count: plays.count,
        cover,
    })
}

/// One list entry. The `id` is assigned at list construction and
/// never changes, so commands keep meaning the same entry no matter
/// how the list has been rearranged since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedEntry {
    pub id: usize,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub count: u64,
    pub cover: String,
}

impl CuratedEntry {
    pub fn text(&self) -> String {
        format!(
            "{} by {} ({} scrobbles)",
            self.album,
            self.artist,
            format_number(self.count)
        )
    }
}

/// What a reorder did besides reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderOutcome {
    /// Tokens that were not a known, unused entry id, verbatim.
    pub skipped: Vec<String>,
    /// Entries dropped because the new order left them out.
    pub dropped: Vec<String>,
}

/// The working list during a curation session.
pub struct CuratedList {
    entries: Vec<CuratedEntry>,
}

impl CuratedList {
    /// Build the initial list, most played first, with stable ids
    /// starting at 1.
    pub fn new(albums: Vec<ResolvedAlbum>) -> Self {
        let entries = albums
            .into_iter()
            .enumerate()
            .map(|(index, album)| CuratedEntry {
                id: index + 1,
                artist: album.artist,
                album: album.album,
                year: album.year,
                count: album.count,
                cover: album.cover,
            })
            .collect();

        CuratedList { entries }
    }

    pub fn entries(&self) -> &[CuratedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the list in the order given by `tokens`.
    ///
    /// Malformed, unknown and repeated tokens are skipped; entries not
    /// mentioned at all are dropped from the list. Both end up in the
    /// outcome so the session can warn about them.
    pub fn reorder(&mut self, tokens: &[String]) -> ReorderOutcome {
        let mut outcome = ReorderOutcome::default();
        let mut reordered = Vec::with_capacity(self.entries.len());
        let mut used_ids = FxHashSet::default();

        for token in tokens {
            let Ok(id) = token.trim().parse::<usize>() else {
                outcome.skipped.push(token.clone());
                continue;
            };
            if !used_ids.insert(id) {
                outcome.skipped.push(token.clone());
                continue;
            }
            match self.entries.iter().find(|entry| entry.id == id) {
                Some(entry) => reordered.push(entry.clone()),
                None => outcome.skipped.push(token.clone()),
            }
        }

        for entry in &self.entries {
            if !used_ids.contains(&entry.id) {
                outcome.dropped.push(entry.text());
            }
        }

        self.entries = reordered;
        outcome
    }

    /// Move the entry with `id` to 1-based `position`, clamped to the
    /// list bounds.
    pub fn move_entry(&mut self, id: usize, position: usize) -> Result<(), String> {
        let from = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| format!("No entry with id {}", id))?;

        let entry = self.entries.remove(from);
        let to = position.clamp(1, self.entries.len() + 1) - 1;
        self.entries.insert(to, entry);

        Ok(())
    }

    /// Remove the entry with `id` from the list for good.
    pub fn discard(&mut self, id: usize) -> Result<CuratedEntry, String> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| format!("No entry with id {}", id))?;

        Ok(self.entries.remove(index))
    }
}
