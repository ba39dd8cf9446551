//! Pairing of raw resources with their spell-checked versions.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

/// Pair every raw resource with every spell-checked resource that has the same base name.
///
/// The base name is the file name up to its first `.`, so that `issue_12.txt`
/// goes with `issue_12.speller.txt`.
/// Pairs come out in the order of `raw`, then of `spelled`.
pub fn align_resources<P, Q>(raw: &[P], spelled: &[Q]) -> Vec<(PathBuf, PathBuf)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    raw.iter()
        .map(as_path)
        .cartesian_product(spelled.iter().map(as_path))
        .filter(|(r, s)| {
            let (r, s) = (base_name(r), base_name(s));
            debug!("{} / {}", r, s);
            r == s
        })
        .map(|(r, s)| (r.to_path_buf(), s.to_path_buf()))
        .collect()
}

#[inline]
fn as_path<P: AsRef<Path>>(p: &P) -> &Path {
    p.as_ref()
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            name.split('.').next().unwrap_or_default().to_string()
        })
        .unwrap_or_default()
}
