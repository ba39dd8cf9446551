//! Retrieval of metadata bundles.
//!
//! Each set has its metadata published as a single zip file,
//! that is downloaded in memory then extracted in a target folder.
use std::io::Cursor;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::Url;
use zip::ZipArchive;

use crate::config::Config;
use crate::error::Error;

/// holds the archive endpoint and
/// http client that will make the requests.
pub struct Fetcher {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// A missing trailing `/` is added to `base_url`, so that its last segment is kept
    /// when the archive name is joined to it.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        Ok(Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(config.archive_base_url())
    }

    /// Location of the metadata bundle of `set_id`.
    pub fn url_for(&self, set_id: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("{}.zip", set_id))?)
    }

    /// Download the metadata bundle of `set_id` and extract it into `target_dir`.
    ///
    /// There is no retry, and a failed extraction may leave some files behind.
    pub fn fetch_and_unpack(&self, set_id: &str, target_dir: &Path) -> Result<PathBuf, Error> {
        let url = self.url_for(set_id)?;
        info!("Retrieving {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.bytes()?;
        debug!("got {} bytes", body.len());

        unpack(&body, target_dir)?;
        info!("Done");
        Ok(target_dir.to_path_buf())
    }
}

/// Extract an in-memory zip archive into `target_dir`, creating it if needed.
pub fn unpack(bytes: &[u8], target_dir: &Path) -> Result<(), Error> {
    info!("Extracting content in {:?}", target_dir);
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    archive.extract(target_dir)?;
    Ok(())
}
