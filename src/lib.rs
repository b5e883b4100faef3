pub mod aggregate;
pub mod app;
pub mod args;
pub mod cache;
pub mod colors;
pub mod config;
pub mod curator;
pub mod display;
pub mod error;
pub mod export;
pub mod musicbrainz;
pub mod ratelimit;
pub mod resolver;
pub mod scrobbles;
pub mod session;
pub mod string_normalization;
pub mod utils;

// Re-export commonly used items
pub use aggregate::{Aggregation, AlbumPlays, YearFilter, aggregate_albums};
pub use args::Args;
pub use cache::{CacheLoad, MetadataCache};
pub use curator::{CuratedEntry, CuratedList, ResolvedAlbum, Unretrievable, evaluate_album};
pub use error::{Error, Result};
pub use export::{default_export_path, export_list};
pub use musicbrainz::{MusicBrainzClient, ReleaseLookup, cover_art_url};
pub use resolver::Resolver;
pub use scrobbles::{Scrobble, read_scrobbles, username_from_path, validate_columns};
pub use session::{Command, parse_command, run_session};
pub use utils::format_number;
