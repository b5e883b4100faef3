use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Name of the optional config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// MusicBrainz courtesy limit is one request per second; a little
/// headroom keeps bursts of cache misses on the right side of it.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1100;

/// Optional settings read from `<data-dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Contact address sent to MusicBrainz in the User-Agent header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Minimum milliseconds between remote requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_ms: Option<u64>,
}

impl Config {
    /// Load config from file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|error| Error::Config(format!("{}: {}", path.display(), error)))
    }

    pub fn rate_limit_ms(&self) -> u64 {
        self.rate_limit_ms.unwrap_or(DEFAULT_RATE_LIMIT_MS)
    }
}
