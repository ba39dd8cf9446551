//! Resolution of subresource identifiers to their local files.
//!
//! The identifier map is a JSON object (`{"<identifier>": "<filename>", ...}`)
//! shipped with each dataset as `id_file_map.json`.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Resolver {
    base_dir: PathBuf,
    map: HashMap<String, String>,
}

impl Resolver {
    pub fn new(base_dir: PathBuf, map: HashMap<String, String>) -> Self {
        Self { base_dir, map }
    }

    /// Build a resolver from a JSON identifier map.
    pub fn from_json<R: Read>(base_dir: PathBuf, reader: R) -> Result<Self, Error> {
        let map: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Self::new(base_dir, map))
    }

    /// Load the identifier map of the configured dataset.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let map_path = config.id_map_path();
        debug!("loading identifier map from {:?}", map_path);
        let f = BufReader::new(File::open(&map_path)?);
        let r = Self::from_json(config.dataset_dir(), f)?;
        debug!("{} identifiers loaded", r.len());
        Ok(r)
    }

    /// Local path of the resource designated by `identifier`.
    ///
    /// Resolution is purely syntactic: the returned path is `<base_dir>/<filename>`,
    /// even when the filename is absolute or climbs with `..`, and it may not exist.
    pub fn resolve(&self, identifier: &str) -> Option<PathBuf> {
        self.map.get(identifier).map(|filename| {
            let mut path = self.base_dir.clone().into_os_string();
            path.push("/");
            path.push(filename);
            PathBuf::from(path)
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
