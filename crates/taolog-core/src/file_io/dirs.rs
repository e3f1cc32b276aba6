//! Application directory layout

use crate::config::{StorageConfig, DEFAULT_CACHE_SUBDIR};
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Working directory of the application and its cache subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    working_dir: PathBuf,
    cache_subdir: String,
}

impl AppDirs {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            cache_subdir: DEFAULT_CACHE_SUBDIR.to_string(),
        }
    }

    pub fn with_cache_subdir(mut self, subdir: impl Into<String>) -> Self {
        self.cache_subdir = subdir.into();
        self
    }

    /// Layout from the `[storage]` table
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        Ok(Self::new(config.resolve_working_dir()?).with_cache_subdir(config.cache_subdir.clone()))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn cache_subdir(&self) -> &str {
        &self.cache_subdir
    }

    /// `subdir` under the working dir; leading and trailing separators in
    /// `subdir` are ignored
    pub fn join(&self, subdir: &str) -> PathBuf {
        let relative = subdir.trim_matches(['/', '\\']);
        if relative.is_empty() {
            return self.working_dir.clone();
        }
        self.working_dir.join(relative)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.join(&self.cache_subdir)
    }
}
