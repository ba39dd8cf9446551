//! Selection of issues by date range and content.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::error::Error;
use crate::metadata::with_record;
use crate::resolver::Resolver;

/// Find the issues published between `date_lower` and `date_upper` (both included)
/// whose text contains `phrase`, ignoring case.
///
/// Every file of `metadata_dir` is read as a metadata record (in path order),
/// and each issue it describes is resolved through `resolver` then scanned line by line.
/// Scanning a file stops at the first matching line.
///
/// Issues unknown to the resolver are skipped.
pub fn filter_by_date_and_content(
    metadata_dir: &Path,
    resolver: &Resolver,
    date_lower: NaiveDate,
    date_upper: NaiveDate,
    phrase: &str,
) -> Result<Vec<PathBuf>, Error> {
    let phrase = phrase.to_lowercase();

    let mut metadata_files = Vec::new();
    for entry in std::fs::read_dir(metadata_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            metadata_files.push(entry.path());
        }
    }
    metadata_files.sort();
    debug!("{} metadata files in {:?}", metadata_files.len(), metadata_dir);

    let mut files = Vec::new();
    for metadata_file in metadata_files {
        let issues = with_record(&metadata_file, |record| record.issues())?;
        for issue in issues
            .into_iter()
            .filter(|issue| issue.date >= date_lower && issue.date <= date_upper)
        {
            let path = match resolver.resolve(&issue.id) {
                Some(p) => p,
                None => {
                    warn!("[{}] no local file for issue", issue.id);
                    continue;
                }
            };
            if contains_phrase(&path, &phrase)? {
                debug!("[{}] {:?} matches", issue.id, path);
                files.push(path);
            }
        }
    }

    info!("{} matching issues", files.len());
    Ok(files)
}

/// `phrase` must already be lowercased.
fn contains_phrase(path: &Path, phrase: &str) -> Result<bool, Error> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        if line?.to_lowercase().contains(phrase) {
            return Ok(true);
        }
    }
    Ok(false)
}
