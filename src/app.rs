use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::aggregate::{YearFilter, aggregate_albums};
use crate::args::Args;
use crate::cache::{CacheLoad, MetadataCache};
use crate::colors::ColorScheme;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::curator::{CuratedList, Unretrievable, evaluate_album};
use crate::display;
use crate::export::{default_export_path, export_list};
use crate::musicbrainz::MusicBrainzClient;
use crate::resolver::Resolver;
use crate::scrobbles::{read_scrobbles, username_from_path};
use crate::session::run_session;
use crate::utils::format_number;

pub const DATA_DIR_NAME: &str = ".aotyfm";
pub const CACHE_FILE_NAME: &str = "retrieved_data.json";
pub const COVERS_DIR_NAME: &str = "album_covers";

pub struct AotyApp {
    pub data_dir: PathBuf,
    pub cache_path: PathBuf,
    pub covers_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AotyApp {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let covers_dir = data_dir.join(COVERS_DIR_NAME);
        fs::create_dir_all(&covers_dir)
            .with_context(|| format!("Could not create data directory {}", data_dir.display()))?;

        Ok(Self {
            cache_path: data_dir.join(CACHE_FILE_NAME),
            config_path: data_dir.join(CONFIG_FILE_NAME),
            covers_dir,
            data_dir,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Could not find home directory")?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

pub fn run(args: Args) -> Result<()> {
    let colors = ColorScheme::new(!args.no_color);

    let app = AotyApp::new(args.data_dir.clone())?;
    let config = Config::load(&app.config_path)?;

    let target_year = args.year.unwrap_or_else(|| Local::now().year());
    let filter = if args.exact_year {
        YearFilter::Exact(target_year)
    } else {
        YearFilter::Since(target_year)
    };

    let username = username_from_path(&args.scrobbles);
    if !args.quiet {
        display::display_run_info(
            username.as_deref(),
            filter,
            &args.scrobbles,
            &app.data_dir,
            &args,
            &colors,
        );
    }

    let scrobbles = read_scrobbles(&args.scrobbles).with_context(|| {
        format!(
            "Could not read the scrobble export {}",
            args.scrobbles.display()
        )
    })?;

    let aggregation = aggregate_albums(&scrobbles, filter);
    if !args.quiet {
        display::display_aggregation(&aggregation, args.verbose, &colors);
    }

    if aggregation.albums.is_empty() {
        println!("{}", colors.error("No albums found for the selected years"));
        return Ok(());
    }

    let (mut cache, cache_load) = MetadataCache::load(&app.cache_path);
    match cache_load {
        CacheLoad::Repaired => println!(
            "{}",
            colors.warning("⚠️  Local cache was corrupted and has been reset.")
        ),
        CacheLoad::Loaded(count) if args.verbose => {
            println!("⚙️  Cache: {} entries loaded", format_number(count as u64));
        }
        _ => {}
    }
    if args.reset_cache {
        cache.reset().context("Could not reset the metadata cache")?;
        if !args.quiet {
            println!("⚙️  Cache reset, starting fresh");
        }
    }
    let cached_before = cache.len();

    let contact = args.contact.clone().or_else(|| config.contact.clone());
    let client = MusicBrainzClient::new(contact.as_deref(), config.rate_limit_ms())
        .context("Could not set up the MusicBrainz client")?;
    let mut resolver = Resolver::new(client, app.covers_dir.clone());

    let total = aggregation.albums.len();
    let bar = display::album_progress_bar(total as u64, args.quiet);
    let mut resolved = Vec::new();
    let mut unretrievable: Vec<(String, Unretrievable)> = Vec::new();

    for plays in &aggregation.albums {
        bar.set_message(display::unretrievable_message(unretrievable.len(), total));
        match evaluate_album(plays, target_year, &mut resolver, &mut cache) {
            Ok(album) => resolved.push(album),
            Err(reason) => {
                unretrievable.push((format!("{} by {}", plays.album, plays.artist), reason));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    // Failed lookups were never inserted, so saving here records
    // exactly the successful ones for the next run.
    if let Err(error) = cache.save() {
        println!(
            "{} Could not save the metadata cache: {}",
            colors.warning("⚠️"),
            error
        );
    }

    if !args.quiet {
        display::display_resolution_summary(
            resolved.len(),
            &unretrievable,
            target_year,
            args.verbose,
            &colors,
        );
        if args.verbose {
            let added = cache.len().saturating_sub(cached_before);
            println!("⚙️  Cache: {} new entries this run", format_number(added as u64));
        }
    }

    let mut list = CuratedList::new(resolved);
    if list.is_empty() {
        println!("{}", colors.error("No albums made the list"));
        return Ok(());
    }

    display::display_list(&list, &colors);

    let export_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_export_path(target_year));

    if args.no_interactive {
        export_list(&list, &export_path)
            .with_context(|| format!("Could not export the list to {}", export_path.display()))?;
        println!(
            "{} Saved {} albums to {}",
            colors.success("💾"),
            colors.number(&format_number(list.len() as u64)),
            export_path.display()
        );
    } else {
        let stdin = io::stdin();
        let saved = run_session(&mut list, stdin.lock(), &export_path, &colors)?;
        if !saved {
            println!(
                "Session ended without saving, run with {} to export directly",
                colors.command("--no-interactive")
            );
        }
    }

    Ok(())
}
