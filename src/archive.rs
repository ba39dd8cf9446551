/*! Zip archive utilities

- [zip_path] packs a file or a whole directory,
- [unzip_path] unpacks an archive and lists what it extracted,
- [check_task_size] guards against sending too large batches of resources to a processing task.

When no output location is given, archives are created next to their input and named after it,
up to the first `.` of the file name (`issue.txt` -> `issue.zip`, `issue.zip` -> `issue/`).
!*/
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::config::MAX_TASK_SIZE;
use crate::error::Error;

/// Zip `input` (a file or a directory) into `output`.
///
/// Directories are walked recursively and their entries are stored relative to the directory's parent,
/// so that unpacking recreates the directory itself.
/// A single file is stored under its file name.
///
/// Returns the path of the created archive.
pub fn zip_path(input: &Path, output: Option<&Path>) -> Result<PathBuf, Error> {
    let output = match output {
        Some(o) => o.to_path_buf(),
        None => sibling(input, Some("zip"))?,
    };

    // fail on a missing input before leaving an empty archive behind
    std::fs::metadata(input)?;

    info!("Zipping {:?} to {:?}", input, output);
    let mut zip = ZipWriter::new(File::create(&output)?);

    if input.is_dir() {
        zip_dir(input, &mut zip)?;
    } else {
        let name = input
            .file_name()
            .ok_or_else(|| Error::Custom(format!("no file name in {:?}", input)))?
            .to_string_lossy();
        add_file(&mut zip, input, &name)?;
    }

    zip.finish()?;
    Ok(output)
}

/// Extract every entry of the archive at `input` into `output`.
///
/// Returns the extracted paths, in archive order.
pub fn unzip_path(input: &Path, output: Option<&Path>) -> Result<Vec<PathBuf>, Error> {
    let output = match output {
        Some(o) => o.to_path_buf(),
        None => sibling(input, None)?,
    };

    info!("Unzipping {:?} to {:?}", input, output);
    let mut archive = ZipArchive::new(File::open(input)?)?;

    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }

    archive.extract(&output)?;
    Ok(names.iter().map(|name| output.join(name)).collect())
}

/// Sum the sizes of `resources`, failing with [Error::TaskTooBig] when it exceeds [MAX_TASK_SIZE].
///
/// Returns the total size in bytes.
pub fn check_task_size<P: AsRef<Path>>(resources: &[P]) -> Result<u64, Error> {
    let mut size = 0;
    for resource in resources {
        size += std::fs::metadata(resource)?.len();
    }
    debug!("task size: {}/{}", size, MAX_TASK_SIZE);

    if size > MAX_TASK_SIZE {
        Err(Error::TaskTooBig {
            size,
            max_size: MAX_TASK_SIZE,
        })
    } else {
        Ok(size)
    }
}

fn zip_dir(dir: &Path, zip: &mut ZipWriter<File>) -> Result<(), Error> {
    let anchor = dir.parent().unwrap_or_else(|| Path::new(""));
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(anchor)
            .map_err(|_| Error::Custom(format!("{:?} is not under {:?}", entry.path(), anchor)))?;
        info!("Zipping {:?}", entry.path());
        add_file(zip, entry.path(), &entry_name(relative))?;
    }
    Ok(())
}

fn add_file(zip: &mut ZipWriter<File>, path: &Path, name: &str) -> Result<(), Error> {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)?;
    let mut f = File::open(path)?;
    io::copy(&mut f, zip)?;
    Ok(())
}

/// zip entry names use `/` whatever the platform.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// `<parent of path>/<file name up to first '.'>[.extension]`
fn sibling(path: &Path, extension: Option<&str>) -> Result<PathBuf, Error> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Custom(format!("no file name in {:?}", path)))?
        .to_string_lossy();
    let stem = file_name.split('.').next().unwrap_or_default();
    let name = match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    };
    Ok(path.parent().unwrap_or_else(|| Path::new("")).join(name))
}
