use chrono::Datelike;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::scrobbles::Scrobble;

/// Which scrobbles count toward the list.
///
/// `Since` keeps everything from the target year onward, so albums
/// still on rotation in later years keep their full play counts.
/// `Exact` restricts counting to the target year itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    Since(i32),
    Exact(i32),
}

impl YearFilter {
    pub fn target(&self) -> i32 {
        match self {
            YearFilter::Since(year) | YearFilter::Exact(year) => *year,
        }
    }

    pub fn keeps(&self, year: i32) -> bool {
        match self {
            YearFilter::Since(target) => year >= *target,
            YearFilter::Exact(target) => year == *target,
        }
    }
}

/// Play count for one (artist, album) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPlays {
    pub artist: String,
    pub album: String,
    pub count: u64,
    /// First non-empty release MBID seen among the album's scrobbles.
    pub album_mbid: Option<Uuid>,
}

/// Aggregated albums plus row-level statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Albums sorted by play count, most played first.
    pub albums: Vec<AlbumPlays>,
    /// Rows counted into an album.
    pub rows_kept: usize,
    /// Rows outside the year filter, including unparseable timestamps.
    pub rows_outside_year: usize,
    /// Rows with no album information (loose tracks and singles).
    pub rows_without_album: usize,
    /// Rows whose timestamp could not be parsed.
    pub rows_bad_timestamp: usize,
}

/// Group scrobbles into per-album play counts.
///
/// Rows without a parseable timestamp or outside the year filter are
/// dropped first, then rows without an album. Ties in the final count
/// are broken by artist and album name so the order is deterministic.
pub fn aggregate_albums(scrobbles: &[Scrobble], filter: YearFilter) -> Aggregation {
    let mut counts: FxHashMap<(String, String), (u64, Option<Uuid>)> = FxHashMap::default();
    let mut rows_kept = 0;
    let mut rows_outside_year = 0;
    let mut rows_without_album = 0;
    let mut rows_bad_timestamp = 0;

    for scrobble in scrobbles {
        let year = match scrobble.timestamp {
            Some(timestamp) => timestamp.year(),
            None => {
                rows_bad_timestamp += 1;
                rows_outside_year += 1;
                continue;
            }
        };

        if !filter.keeps(year) {
            rows_outside_year += 1;
            continue;
        }

        let Some(album) = &scrobble.album else {
            rows_without_album += 1;
            continue;
        };

        let entry = counts
            .entry((scrobble.artist.clone(), album.clone()))
            .or_insert((0, None));
        entry.0 += 1;
        if entry.1.is_none() {
            entry.1 = scrobble.album_mbid;
        }
        rows_kept += 1;
    }

    let mut albums: Vec<AlbumPlays> = counts
        .into_iter()
        .map(|((artist, album), (count, album_mbid))| AlbumPlays {
            artist,
            album,
            count,
            album_mbid,
        })
        .collect();

    albums.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.artist.cmp(&b.artist))
            .then_with(|| a.album.cmp(&b.album))
    });

    Aggregation {
        albums,
        rows_kept,
        rows_outside_year,
        rows_without_album,
        rows_bad_timestamp,
    }
}
