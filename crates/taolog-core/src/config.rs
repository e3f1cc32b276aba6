//! Configuration
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! [logging]
//! profile = "production"
//! disabled = false
//! facade_match = "boundary"
//!
//! [storage]
//! working_dir = "/var/lib/myapp"
//! cache_subdir = "cache"
//! ```

use crate::errors::{Result, TaoError};
use crate::location::FacadeMatch;
use crate::logging_facility::Profile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name used under the platform data dir when no working dir is set
pub const DEFAULT_APP_DIR: &str = "taolog";

/// Default cache subdirectory of the working dir
pub const DEFAULT_CACHE_SUBDIR: &str = "cache";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaoConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
    pub disabled: bool,
    pub facade_match: FacadeMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Application working directory; platform data dir when unset
    pub working_dir: Option<PathBuf>,
    pub cache_subdir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            cache_subdir: DEFAULT_CACHE_SUBDIR.to_string(),
        }
    }
}

impl StorageConfig {
    /// Configured working dir, or `<data_local_dir>/taolog`
    pub fn resolve_working_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.working_dir {
            return Ok(dir.clone());
        }
        dirs::data_local_dir()
            .map(|d| d.join(DEFAULT_APP_DIR))
            .ok_or(TaoError::DirectoryUnavailable {
                what: "local data directory",
            })
    }
}

impl TaoConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TaoConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| TaoError::io("read_config", path, e))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        let subdir = self.storage.cache_subdir.trim_matches(['/', '\\']);
        if subdir.is_empty() {
            return Err(TaoError::InvalidConfig {
                reason: "storage.cache_subdir must name a directory".to_string(),
            });
        }
        if Path::new(subdir).is_absolute() || subdir.split(['/', '\\']).any(|p| p == "..") {
            return Err(TaoError::InvalidConfig {
                reason: format!(
                    "storage.cache_subdir '{}' must stay inside the working dir",
                    self.storage.cache_subdir
                ),
            });
        }
        Ok(())
    }
}
