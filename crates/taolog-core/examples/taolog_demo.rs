//! taolog demonstration
//!
//! Logs from a few call sites, renders a value and copies a file inside a
//! temporary working directory.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde::Serialize;
use std::collections::BTreeMap;
use taolog_core::formatter::{map_to_lines, to_lines};
use taolog_core::logging_facility::{init, Profile};
use taolog_core::{log_i, AppDirs, FileIo, Logger, TaoConfig};

#[derive(Serialize)]
struct Photo {
    id: u32,
    title: String,
    width: u32,
    height: u32,
}

struct Gallery {
    logger: Logger,
}

impl Gallery {
    fn open(&self) {
        self.logger.i_for(self, "opening gallery");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TaoConfig::from_toml_str("[logging]\nprofile = \"development\"\n")?;
    init(config.logging.profile);

    let logger = Logger::default();
    logger.d("demo started");
    logger.thread_info_with("main thread");

    Gallery {
        logger: logger.clone(),
    }
    .open();

    let photo = Photo {
        id: 7,
        title: "Harbour".to_string(),
        width: 1920,
        height: 1080,
    };
    logger.v(&to_lines(&photo));

    let mut sizes = BTreeMap::new();
    sizes.insert("thumb", 128);
    sizes.insert("preview", 1024);
    logger.v(&map_to_lines(sizes));

    let work_dir = tempfile::tempdir()?;
    let io = FileIo::new(AppDirs::new(work_dir.path()), logger.clone());
    let src = io.file_name("photo.raw");
    std::fs::write(&src, b"raw bytes")?;
    let dst = io.cache_file_name("photo.raw")?;
    let bytes = io.copy(&src, &dst)?;
    log_i!(logger, "copied {} bytes into the cache", bytes);

    // Failures are logged with the FileIo call site even when ignored here
    let _ = io.copy(io.file_name("missing.raw"), &dst);

    logger.set_disabled(true);
    logger.e("not emitted");

    let removed = io.clear_application_data()?;
    println!("removed {} entries", removed);
    Ok(())
}
