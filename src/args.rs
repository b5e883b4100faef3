use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aotyfm")]
#[command(about = "Build your Album of the Year list from a Last.fm scrobble export")]
pub struct Args {
    /// Path to the scrobble CSV export (recenttracks-<user>-<ts>.csv)
    pub scrobbles: PathBuf,

    /// Target year for the list (defaults to the current year)
    #[arg(short, long, value_name = "YEAR", value_parser = clap::value_parser!(i32).range(1900..=2100))]
    pub year: Option<i32>,

    /// Count only scrobbles from the target year itself, not later ones
    #[arg(long)]
    pub exact_year: bool,

    /// Directory for the metadata cache and covers (default: ~/.aotyfm)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Export path (default: aoty_<year>.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Contact address sent to MusicBrainz in the User-Agent header
    #[arg(long, value_name = "EMAIL")]
    pub contact: Option<String>,

    /// Discard all cached metadata before processing
    #[arg(long)]
    pub reset_cache: bool,

    /// Skip the interactive session and export the list as resolved
    #[arg(short = 'n', long)]
    pub no_interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show per-album failures and cache statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the final list
    #[arg(short, long)]
    pub quiet: bool,
}
