//! Bundled read-only assets

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Source of named read-only assets shipped with the application
pub trait AssetSource: Send + Sync {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>>;
}

/// Assets served from a directory on disk
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
        let relative = name.trim_start_matches(['/', '\\']);
        if relative.split(['/', '\\']).any(|part| part == "..") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("asset name '{}' escapes the asset root", name),
            ));
        }
        Ok(Box::new(File::open(self.root.join(relative))?))
    }
}
