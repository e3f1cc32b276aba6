use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TaoError
pub type Result<T> = std::result::Result<T, TaoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaoErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Introspection
    UnknownType,

    // Integration/IO
    Io,
    Config,

    // Internal
    Internal,
}

impl TaoErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TaoErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TaoErrorKind::NotFound => "ERR_NOT_FOUND",
            TaoErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            TaoErrorKind::UnknownType => "ERR_UNKNOWN_TYPE",
            TaoErrorKind::Io => "ERR_IO",
            TaoErrorKind::Config => "ERR_CONFIG",
            TaoErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for taolog operations
#[derive(Error, Debug)]
pub enum TaoError {
    /// A required path argument was empty
    #[error("{what} path is empty")]
    EmptyPath { what: &'static str },

    /// Source file or directory does not exist
    #[error("Source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Asset could not be found in the asset source
    #[error("Asset not found: {name}")]
    AssetNotFound { name: String },

    /// A type path could not be resolved to a simple name
    #[error("Type not resolvable: '{type_name}'")]
    TypeNotResolvable { type_name: String },

    /// Filesystem operation failed
    #[error("I/O error in '{op}' on {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// No platform directory could be determined
    #[error("Platform directory unavailable: {what}")]
    DirectoryUnavailable { what: &'static str },
}

impl TaoError {
    /// Wrap an I/O error with the operation and path it concerns
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaoError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> TaoErrorKind {
        match self {
            TaoError::EmptyPath { .. } => TaoErrorKind::InvalidInput,
            TaoError::SourceNotFound { .. } | TaoError::AssetNotFound { .. } => {
                TaoErrorKind::NotFound
            }
            TaoError::TypeNotResolvable { .. } => TaoErrorKind::UnknownType,
            TaoError::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => TaoErrorKind::NotFound,
                std::io::ErrorKind::AlreadyExists => TaoErrorKind::AlreadyExists,
                _ => TaoErrorKind::Io,
            },
            TaoError::InvalidConfig { .. } => TaoErrorKind::Config,
            TaoError::DirectoryUnavailable { .. } => TaoErrorKind::Internal,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<toml::de::Error> for TaoError {
    fn from(err: toml::de::Error) -> Self {
        TaoError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found_kind() {
        let err = TaoError::io(
            "copy",
            "/nope",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), TaoErrorKind::NotFound);
        assert_eq!(err.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_io_other_maps_to_io_kind() {
        let err = TaoError::io(
            "rename",
            "/x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), TaoErrorKind::Io);
        assert!(err.to_string().contains("rename"));
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error as _;
        let err = TaoError::io(
            "delete",
            "/x",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(err.source().is_some());
    }
}
