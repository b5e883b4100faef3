use std::path::{Path, PathBuf};

use crate::curator::CuratedList;
use crate::error::Result;

/// Header row of the exported list.
pub const EXPORT_COLUMNS: [&str; 4] = ["Album", "Artist", "Release Year", "Total Scrobbles"];

/// Default export filename, e.g. "aoty_2024.csv".
pub fn default_export_path(target_year: i32) -> PathBuf {
    PathBuf::from(format!("aoty_{}.csv", target_year))
}

/// Write the list to `path` in its current order.
pub fn export_list(list: &CuratedList, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(EXPORT_COLUMNS)?;
    for entry in list.entries() {
        let count = entry.count.to_string();
        writer.write_record([
            entry.album.as_str(),
            entry.artist.as_str(),
            entry.year.as_str(),
            count.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
