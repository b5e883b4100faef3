use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::aggregate::{Aggregation, YearFilter};
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::curator::{CuratedList, Unretrievable};
use crate::utils::{format_number, format_percent};

pub fn display_run_info(
    username: Option<&str>,
    filter: YearFilter,
    scrobbles_path: &Path,
    data_dir: &Path,
    args: &Args,
    colors: &ColorScheme,
) {
    match username {
        Some(username) => println!(
            "🎵 Building the {} AOTY list for {}",
            colors.year(&filter.target().to_string()),
            colors.artist_name(&format!("\"{}\"", username))
        ),
        None => println!(
            "🎵 Building the {} AOTY list",
            colors.year(&filter.target().to_string())
        ),
    }

    match filter {
        YearFilter::Since(year) => println!("⚙️  Counting scrobbles since {}", year),
        YearFilter::Exact(year) => println!("⚙️  Counting scrobbles from {} only", year),
    }

    if args.verbose {
        println!("⚙️  Using data directory {}", data_dir.display());
    }

    println!("🔍 Reading {}...", scrobbles_path.display());
}

pub fn display_aggregation(aggregation: &Aggregation, verbose: bool, colors: &ColorScheme) {
    println!(
        "{} Counted {} scrobbles across {} albums",
        colors.stats("📊"),
        colors.number(&format_number(aggregation.rows_kept as u64)),
        colors.number(&format_number(aggregation.albums.len() as u64))
    );

    if verbose {
        println!(
            "   {} outside the year range ({} with unparseable timestamps), {} without album info",
            format_number(aggregation.rows_outside_year as u64),
            format_number(aggregation.rows_bad_timestamp as u64),
            format_number(aggregation.rows_without_album as u64)
        );
    }
}

pub fn album_progress_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} albums ({eta}) {msg}",
    ) {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

pub fn unretrievable_message(unretrievable: usize, total: usize) -> String {
    format!(
        "Unretrievable: {} ({})",
        format_number(unretrievable as u64),
        format_percent(unretrievable, total)
    )
}

pub fn display_resolution_summary(
    resolved: usize,
    unretrievable: &[(String, Unretrievable)],
    target_year: i32,
    verbose: bool,
    colors: &ColorScheme,
) {
    let total = resolved + unretrievable.len();

    println!(
        "{} Resolved {} of {} albums for {}",
        colors.success("✅"),
        colors.number(&format_number(resolved as u64)),
        colors.number(&format_number(total as u64)),
        colors.year(&target_year.to_string())
    );

    if !unretrievable.is_empty() {
        println!(
            "{} {}",
            colors.error("❌"),
            unretrievable_message(unretrievable.len(), total)
        );

        if verbose {
            for (label, reason) in unretrievable {
                println!("   - {}: {}", label, reason);
            }
        }
    }
}

pub fn display_list(list: &CuratedList, colors: &ColorScheme) {
    if list.is_empty() {
        println!("{}", colors.error("The list is empty"));
        return;
    }

    println!();
    for (index, entry) in list.entries().iter().enumerate() {
        println!(
            "{:>3} {} {} by {} ({}) - {} scrobbles",
            colors.rank(&format!("{}.", index + 1)),
            colors.item_id(&format!("[{}]", entry.id)),
            colors.album(&format!("\"{}\"", entry.album)),
            colors.artist_name(&entry.artist),
            colors.year(&entry.year),
            colors.number(&format_number(entry.count))
        );
    }
    println!();
}

pub fn display_session_intro(colors: &ColorScheme) {
    println!(
        "✏️  Entering curation session - type {} for commands, {} when finished",
        colors.command("'help'"),
        colors.command("'done'")
    );
}

pub fn display_session_help(colors: &ColorScheme) {
    println!("Commands:");
    println!(
        "  {}                  show the current list",
        colors.command("list")
    );
    println!(
        "  {}  rebuild the list in the given order; entries left out are dropped",
        colors.command("order <id> [id ...]")
    );
    println!(
        "  {}       move an entry to a position",
        colors.command("move <id> <pos>")
    );
    println!(
        "  {}             remove an entry from the list",
        colors.command("drop <id>")
    );
    println!(
        "  {}                  export the list to CSV",
        colors.command("save")
    );
    println!(
        "  {}                  finish the session",
        colors.command("done")
    );
}
