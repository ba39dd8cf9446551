//! Listings of the preprocessed resources used by the exercises.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;

/// Every preprocessed file of exercise 3.
pub fn spellchecked_resources_ex3(config: &Config) -> Result<Vec<PathBuf>, Error> {
    files_under(&config.preprocessed_dir().join("Exercise3"), |_| true)
}

/// Spell-checker outputs of chapter 3, i.e. files living under a `speller` directory.
pub fn spellchecked_resources_ch3(config: &Config) -> Result<Vec<PathBuf>, Error> {
    files_under(&config.preprocessed_dir().join("Chapter3"), |path| {
        path.parent()
            .map(|dir| dir.to_string_lossy().contains("speller"))
            .unwrap_or(false)
    })
}

/// Liner outputs of chapter 3 (`*liner.zip*` files).
pub fn liner_output_files_ch3(config: &Config) -> Result<Vec<PathBuf>, Error> {
    files_under(&config.preprocessed_dir().join("Chapter3"), |path| {
        path.file_name()
            .map(|name| name.to_string_lossy().contains("liner.zip"))
            .unwrap_or(false)
    })
}

/// Regular files under `root` accepted by `keep`, sorted.
fn files_under<F>(root: &Path, keep: F) -> Result<Vec<PathBuf>, Error>
where
    F: Fn(&Path) -> bool,
{
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && keep(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
