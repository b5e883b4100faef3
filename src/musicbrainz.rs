//! MusicBrainz and Cover Art Archive clients.
//!
//! One release lookup per unique album, throttled to the courtesy
//! limit. Missing releases and missing cover art are normal outcomes
//! here, not errors.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

use crate::error::Result;
use crate::ratelimit::RateLimiter;

pub const MUSICBRAINZ_ROOT: &str = "https://musicbrainz.org/ws/2";
pub const COVER_ART_ROOT: &str = "https://coverartarchive.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote source of release metadata.
///
/// The tool only ever needs two things from the outside world: the
/// year a release came out and its front cover. Anything implementing
/// this can stand in for the real services.
pub trait ReleaseLookup {
    /// Fetch the release year for an MBID, `None` when the service
    /// has no usable date for it.
    fn release_year(&mut self, mbid: Uuid) -> Result<Option<String>>;

    /// Download the front cover for an MBID into `dest`, `None` when
    /// no cover art exists.
    fn download_cover(&mut self, mbid: Uuid, dest: &Path) -> Result<Option<PathBuf>>;
}

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    date: Option<String>,
}

pub struct MusicBrainzClient {
    client: reqwest::blocking::Client,
    limiter: RateLimiter,
}

impl MusicBrainzClient {
    pub fn new(contact: Option<&str>, rate_limit_ms: u64) -> Result<Self> {
        let user_agent = match contact {
            Some(contact) => format!("aotyfm/{} ({})", env!("CARGO_PKG_VERSION"), contact),
            None => format!("aotyfm/{}", env!("CARGO_PKG_VERSION")),
        };

        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(MusicBrainzClient {
            client,
            limiter: RateLimiter::from_millis(rate_limit_ms),
        })
    }
}

impl ReleaseLookup for MusicBrainzClient {
    fn release_year(&mut self, mbid: Uuid) -> Result<Option<String>> {
        self.limiter.wait_if_needed();

        let url = format!("{}/release/{}?fmt=json", MUSICBRAINZ_ROOT, mbid);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let release: Release = response.json()?;

        // The date field is "YYYY", "YYYY-MM" or "YYYY-MM-DD"; the
        // year is always the first four characters.
        Ok(release
            .date
            .as_deref()
            .and_then(|date| date.get(..4))
            .map(str::to_string))
    }

    fn download_cover(&mut self, mbid: Uuid, dest: &Path) -> Result<Option<PathBuf>> {
        self.limiter.wait_if_needed();

        let url = cover_art_url(mbid);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let bytes = response.bytes()?;

        // Write via a temp file so an interrupted download never
        // leaves a truncated cover behind.
        let temp_path = dest.with_extension("jpg.tmp");
        fs::write(&temp_path, &bytes)?;
        fs::rename(&temp_path, dest)?;

        Ok(Some(dest.to_path_buf()))
    }
}

/// Deterministic front-cover URL for a release.
pub fn cover_art_url(mbid: Uuid) -> String {
    format!("{}/release/{}/front", COVER_ART_ROOT, mbid)
}
