use chrono::NaiveDateTime;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Columns a Last.fm scrobble export must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "uts",
    "utc_time",
    "artist",
    "artist_mbid",
    "album",
    "album_mbid",
    "track",
    "track_mbid",
];

/// Timestamp format used by Last.fm exports, e.g. "24 Aug 2024, 18:05".
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M";

/// One row of the scrobble export, as written by the exporter.
#[derive(Debug, Deserialize)]
struct RawScrobble {
    artist: String,
    artist_mbid: Option<String>,
    album: Option<String>,
    album_mbid: Option<String>,
    track: String,
    track_mbid: Option<String>,
    utc_time: String,
}

/// One listen, with identifiers and timestamp already parsed.
///
/// Rows with timestamps the exporter mangled keep `timestamp: None`
/// and fall out naturally at the year filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrobble {
    pub artist: String,
    pub album: Option<String>,
    pub track: String,
    pub timestamp: Option<NaiveDateTime>,
    pub artist_mbid: Option<Uuid>,
    pub album_mbid: Option<Uuid>,
    pub track_mbid: Option<Uuid>,
}

impl From<RawScrobble> for Scrobble {
    fn from(raw: RawScrobble) -> Self {
        Scrobble {
            timestamp: parse_timestamp(&raw.utc_time),
            artist_mbid: parse_mbid(raw.artist_mbid.as_deref()),
            album_mbid: parse_mbid(raw.album_mbid.as_deref()),
            track_mbid: parse_mbid(raw.track_mbid.as_deref()),
            artist: raw.artist,
            album: raw.album.filter(|album| !album.trim().is_empty()),
            track: raw.track,
        }
    }
}

/// Read a scrobble export, rejecting files that are not one.
///
/// A file missing any required column fails with the full list of
/// missing names before a single row is processed.
pub fn read_scrobbles(path: &Path) -> Result<Vec<Scrobble>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    validate_columns(&headers)?;

    let mut scrobbles = Vec::new();
    for row in reader.deserialize::<RawScrobble>() {
        scrobbles.push(Scrobble::from(row?));
    }

    Ok(scrobbles)
}

/// Check that every required column is present in the header row.
pub fn validate_columns(headers: &csv::StringRecord) -> Result<()> {
    let present: FxHashSet<&str> = headers.iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !present.contains(**column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns(missing))
    }
}

/// Recover the Last.fm username from an export filename like
/// "recenttracks-somebody-1724514300.csv". Falls back to the file stem.
pub fn username_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;

    let username = match stem.split_once("recenttracks-") {
        Some((_, rest)) => rest.split('-').next().unwrap_or(rest),
        None => stem,
    };

    if username.is_empty() {
        None
    } else {
        Some(username.to_string())
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).ok()
}

fn parse_mbid(text: Option<&str>) -> Option<Uuid> {
    text.and_then(|value| Uuid::parse_str(value.trim()).ok())
}
