/*! Dataset configuration

Every location used by the tutorial helpers is derived from a home directory and a set identifier.
A [Config] is built once by the caller and passed by reference to whatever needs it.
!*/
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Polish newspaper set.
pub const DEFAULT_SET_ID: &str = "9200357";

/// Maximum payload (in bytes) of a batch of resources sent to a processing task.
pub const MAX_TASK_SIZE: u64 = 30_000_000;

/// Where metadata bundles are served from. `<set_id>.zip` is appended.
pub const ARCHIVE_BASE_URL: &str =
    "https://europeana-oai.clarin.eu/metadata/fulltext-aggregation/";

/// CMDI core namespace (`cmd` prefix).
pub const CMD_NS: &str = "http://www.clarin.eu/cmd/1";

/// CMDI text profile namespace (`cmdp_text` prefix).
pub const CMDP_TEXT_NS: &str =
    "http://www.clarin.eu/cmd/1/profiles/clarin.eu:cr1:p_1633000337997";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    set_id: String,
    data_dir: PathBuf,
    metadata_dir: PathBuf,
    output_dir: PathBuf,
    archive_base_url: String,
}

impl Config {
    /// Derive the dataset layout from `home`:
    ///
    /// - `<home>/data/<set_id>` holds the resources and `id_file_map.json`
    /// - `<home>/temp/metadata/<set_id>` holds the unpacked metadata records
    /// - `<home>/output` is the output location
    pub fn new(home: &Path, set_id: &str) -> Self {
        Self {
            set_id: set_id.to_string(),
            data_dir: home.join("data"),
            metadata_dir: home.join("temp").join("metadata").join(set_id),
            output_dir: home.join("output"),
            archive_base_url: ARCHIVE_BASE_URL.to_string(),
        }
    }

    /// Same as [Config::new], using the current user's home directory.
    pub fn from_home(set_id: &str) -> Result<Self, Error> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Custom("could not determine home directory".to_string()))?;
        Ok(Self::new(&home, set_id))
    }

    /// Replace the archive endpoint (mostly useful for mirrors).
    pub fn with_archive_base_url(mut self, url: &str) -> Self {
        self.archive_base_url = url.to_string();
        self
    }

    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Base directory of resolved resources.
    pub fn dataset_dir(&self) -> PathBuf {
        self.data_dir.join(&self.set_id)
    }

    pub fn id_map_path(&self) -> PathBuf {
        self.dataset_dir().join("id_file_map.json")
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn preprocessed_dir(&self) -> PathBuf {
        self.data_dir.join("preprocessed_data")
    }

    pub fn archive_base_url(&self) -> &str {
        &self.archive_base_url
    }
}
