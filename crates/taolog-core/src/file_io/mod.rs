//! File and directory helpers
//!
//! [`FileIo`] operates relative to an application working directory and
//! reports every outcome through the logging façade, so a failed copy shows
//! up in the log tagged with the `FileIo` call site even when the caller
//! ignores the returned error.
//!
//! Calls go straight to the [`Logger`] methods, one call per line, so the
//! tag carries the line of the call in this file.

pub mod assets;
pub mod dirs;

pub use assets::{AssetSource, DirAssetSource};
pub use dirs::AppDirs;

use crate::errors::{Result, TaoError};
use crate::{Logger, Severity};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const BUFFER_SIZE: usize = 8192;

/// Filesystem helpers bound to an application directory layout
#[derive(Debug, Clone)]
pub struct FileIo {
    dirs: AppDirs,
    logger: Logger,
}

impl FileIo {
    pub fn new(dirs: AppDirs, logger: Logger) -> Self {
        Self { dirs, logger }
    }

    pub fn dirs(&self) -> &AppDirs {
        &self.dirs
    }

    /// Copy `src` to `dst`, returning the number of bytes copied
    pub fn copy(&self, src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        if src.as_os_str().is_empty() {
            self.logger.e("Source file name is empty.");
            return Err(TaoError::EmptyPath { what: "Source" });
        }
        if dst.as_os_str().is_empty() {
            self.logger.e("Destination file name is empty.");
            return Err(TaoError::EmptyPath {
                what: "Destination",
            });
        }
        if !src.exists() {
            self.logger.e("Source file is missing.");
            return Err(TaoError::SourceNotFound {
                path: src.to_path_buf(),
            });
        }

        let copied = File::open(src)
            .map_err(|e| TaoError::io("copy", src, e))
            .and_then(|reader| write_stream(reader, dst));

        match copied {
            Ok(bytes) => {
                let message = format!("Success copied file {} to {}", src.display(), dst.display());
                self.logger.v(&message);
                Ok(bytes)
            }
            Err(err) => {
                let message = format!("Can't copy file {} to {}", src.display(), dst.display());
                self.logger.log_with_error(Severity::Error, &message, &err);
                Err(err)
            }
        }
    }

    /// Copy the asset `name` out of `assets` to `dst`
    pub fn copy_asset(
        &self,
        assets: &dyn AssetSource,
        name: &str,
        dst: impl AsRef<Path>,
    ) -> Result<u64> {
        let dst = dst.as_ref();
        if name.is_empty() {
            self.logger.e("Assets file name is empty.");
            return Err(TaoError::EmptyPath { what: "Asset" });
        }
        if dst.as_os_str().is_empty() {
            self.logger.e("Destination file name is empty.");
            return Err(TaoError::EmptyPath {
                what: "Destination",
            });
        }

        let copied = assets
            .open(name)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => TaoError::AssetNotFound {
                    name: name.to_string(),
                },
                _ => TaoError::io("copy_asset", name, e),
            })
            .and_then(|reader| write_stream(reader, dst));

        match copied {
            Ok(bytes) => {
                self.logger.v(&format!("Success copy file {} to {}", name, dst.display()));
                Ok(bytes)
            }
            Err(err) => {
                let message = format!("Can't copy file from assets {} to {}", name, dst.display());
                self.logger.log_with_error(Severity::Error, &message, &err);
                Err(err)
            }
        }
    }

    /// Delete a single file
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => {
                self.logger.v(&format!("File success deleted {}", path.display()));
                Ok(())
            }
            Err(e) => {
                self.logger.w(&format!("Fail to delete file {}", path.display()));
                Err(TaoError::io("delete", path, e))
            }
        }
    }

    /// Delete the files and empty subdirectories directly inside `dir`,
    /// returning how many entries were removed
    ///
    /// Entries that cannot be removed are logged and skipped.
    pub fn delete_dir_content(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| TaoError::io("delete_dir_content", dir, e))?;

        let mut deleted = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            let removed = if path.is_dir() {
                fs::remove_dir(&path)
            } else {
                fs::remove_file(&path)
            };
            match removed {
                Ok(()) => {
                    deleted += 1;
                    self.logger.v(&format!("File success deleted {}", path.display()));
                }
                Err(_) => self.logger.w(&format!("Fail to delete file {}", path.display())),
            }
        }
        Ok(deleted)
    }

    /// Delete `path` recursively: a directory with all its content, or a
    /// single file
    pub fn delete_dir(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.logger.e("Directory path is empty - can't delete.");
            return Err(TaoError::EmptyPath { what: "Directory" });
        }
        let removed = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        removed.map_err(|e| TaoError::io("delete_dir", path, e))
    }

    pub fn rename(&self, src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        match fs::rename(src, dst) {
            Ok(()) => {
                self.logger.v(&format!("File success renamed to {}", dst.display()));
                Ok(())
            }
            Err(e) => {
                self.logger.w(&format!("Fail to rename file {}", src.display()));
                Err(TaoError::io("rename", src, e))
            }
        }
    }

    pub fn working_dir(&self) -> &Path {
        self.dirs.working_dir()
    }

    /// `subdir` under the working dir (not created)
    pub fn dir(&self, subdir: &str) -> PathBuf {
        self.dirs.join(subdir)
    }

    /// The cache directory, created if missing
    pub fn cache_dir(&self) -> Result<PathBuf> {
        self.create_dir(self.dirs.cache_subdir())
    }

    pub fn create_cache_dir(&self) -> Result<()> {
        self.cache_dir().map(|_| ())
    }

    /// Full path of `file_name` inside the cache directory, creating the
    /// directory if missing
    pub fn cache_file_name(&self, file_name: &str) -> Result<PathBuf> {
        Ok(self.cache_dir()?.join(file_name))
    }

    /// Full path of `file_name` inside the working dir
    pub fn file_name(&self, file_name: &str) -> PathBuf {
        self.file_name_in(None, file_name)
    }

    /// Full path of `file_name` inside `subdir` of the working dir; an empty
    /// or missing `subdir` means the working dir itself
    pub fn file_name_in(&self, subdir: Option<&str>, file_name: &str) -> PathBuf {
        match subdir {
            Some(subdir) if !subdir.is_empty() => self.dir(subdir).join(file_name),
            _ => self.working_dir().join(file_name),
        }
    }

    /// Create `subdir` (and its parents) under the working dir
    pub fn create_dir(&self, subdir: &str) -> Result<PathBuf> {
        let path = self.dirs.join(subdir);
        if path.is_dir() {
            return Ok(path);
        }
        match fs::create_dir_all(&path) {
            Ok(()) => {
                self.logger.i(&format!("++ Created the Directory: {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                let message = format!("-- Creating the Directory is failed: {}", path.display());
                self.logger.w(&message);
                Err(TaoError::io("create_dir", path, e))
            }
        }
    }

    /// Delete everything the application stored under its working dir,
    /// returning how many top-level entries were removed
    pub fn clear_application_data(&self) -> Result<usize> {
        let root = self.working_dir();
        if !root.exists() {
            return Ok(0);
        }
        let entries =
            fs::read_dir(root).map_err(|e| TaoError::io("clear_application_data", root, e))?;

        let mut deleted = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            match self.delete_dir(&path) {
                Ok(()) => {
                    deleted += 1;
                    let message = format!(
                        "**************** DELETED -> ({}) *******************",
                        path.display()
                    );
                    self.logger.i(&message);
                }
                Err(err) => {
                    let message = format!("Fail to delete {}", path.display());
                    self.logger.log_with_error(Severity::Warn, &message, &err);
                }
            }
        }
        Ok(deleted)
    }
}

/// File name without directory or extension: `a/b/photo.jpg` -> `photo`
pub fn file_name_no_extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_stream(reader: impl Read, dst: &Path) -> Result<u64> {
    let file = File::create(dst).map_err(|e| TaoError::io("copy", dst, e))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, reader);
    let mut writer = BufWriter::with_capacity(BUFFER_SIZE, file);
    let bytes = io::copy(&mut reader, &mut writer).map_err(|e| TaoError::io("copy", dst, e))?;
    writer.flush().map_err(|e| TaoError::io("copy", dst, e))?;
    Ok(bytes)
}
