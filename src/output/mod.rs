//! Output module for the collected seed list
//!
//! This module handles:
//! - Writing the seed list to disk once the crawl completes
//! - Summarizing crawl statistics

pub mod stats;

pub use stats::{print_statistics, CrawlStats};

use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the seed list as UTF-8 text, one URL per line
///
/// The file is created (or truncated) and written in a single pass; every
/// entry, including the last, is followed by a newline. I/O failures surface
/// as `SeedwalkError::Io`.
///
/// # Example
///
/// ```no_run
/// use seedwalk::output::write_seed_list;
/// use std::path::Path;
///
/// let urls = vec!["https://example.com/".to_string()];
/// write_seed_list(Path::new("seedList.txt"), &urls).unwrap();
/// ```
pub fn write_seed_list(path: &Path, urls: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for url in urls {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()?;
    Ok(())
}
