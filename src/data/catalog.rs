//! City → dataset path mapping, fixed once at startup.

use crate::models::city::City;
use std::path::{Path, PathBuf};

pub struct Catalog {
    data_dir: PathBuf,
}

impl Catalog {
    /// Build the catalog from the configured data directory; a leading `~`
    /// is expanded to the user's home.
    pub fn new(data_dir: &str) -> Self {
        Self {
            data_dir: expand_tilde(data_dir),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn dataset_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.dataset_file())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
