//! Formatting macros for the façade
//!
//! Each macro takes a [`Logger`](crate::Logger) expression and `format!`
//! arguments, optionally preceded by `err = <&error>`. The message is only
//! formatted when the logger is enabled.

/// Shared expansion of the severity macros
#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($logger:expr, $severity:expr, err = $err:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if !logger.is_disabled() {
            logger.log_with_error($severity, &::std::format!($($arg)+), $err);
        }
    }};
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        if !logger.is_disabled() {
            logger.log($severity, &::std::format!($($arg)+));
        }
    }};
}

/// Log a formatted verbose message
///
/// # Example
///
/// ```
/// # use taolog_core::{log_v, Logger};
/// let logger = Logger::default();
/// log_v!(logger, "loaded {} entries", 3);
/// ```
#[macro_export]
macro_rules! log_v {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log a formatted debug message
#[macro_export]
macro_rules! log_d {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted info message
#[macro_export]
macro_rules! log_i {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted warning
#[macro_export]
macro_rules! log_w {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log a formatted error, optionally with its cause
///
/// # Example
///
/// ```
/// # use taolog_core::{log_e, Logger};
/// let logger = Logger::default();
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// log_e!(logger, err = &err, "can't copy {}", "a.txt");
/// ```
#[macro_export]
macro_rules! log_e {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a formatted "what a terrible failure" message
#[macro_export]
macro_rules! log_wtf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::__log_at!($logger, $crate::Severity::Assert, $($arg)+)
    };
}
