//! taolog Core - caller-tagged logging façade and small I/O utilities
//!
//! This crate provides:
//! - A logging façade whose records are tagged with the calling location
//!   (`" > Worker:run:42"`), resolved by walking the captured call stack
//!   past the façade's own frames
//! - Pluggable log sinks, with a `tracing` sink by default
//! - Debug renderings of maps and `serde`-serializable values
//! - File and directory helpers bound to an application working directory
//! - TOML configuration for all of the above

pub mod config;
pub mod errors;
pub mod file_io;
pub mod formatter;
pub mod location;
pub mod logger;
pub mod logging_facility;
pub mod sink;

// Re-export commonly used types
pub use config::TaoConfig;
pub use errors::{Result, TaoError, TaoErrorKind};
pub use file_io::{AppDirs, FileIo};
pub use location::{CallFrame, FacadeMatch, LocationResolver};
pub use logger::{Logger, LoggerBuilder, ThreadInfo};
pub use sink::{LogRecord, LogSink, TracingSink};
pub use taolog_core_types::Severity;
