//! Log sinks
//!
//! The façade hands every record to a [`LogSink`]. [`TracingSink`] forwards
//! records into `tracing`, where the subscriber installed by
//! [`crate::logging_facility::init`] decides how they are emitted.

use std::error::Error;
use taolog_core_types::Severity;

/// One façade log call, as seen by a sink
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub tag: &'a str,
    pub message: &'a str,
    pub error: Option<&'a (dyn Error + 'static)>,
}

/// Destination for façade log records
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord<'_>);
}

/// Sink that emits each record as a `tracing` event
///
/// Verbose maps to TRACE, Assert to ERROR with `assert = true`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord<'_>) {
        let tag = record.tag;
        let severity = record.severity.as_str();
        let message = record.message;
        let error = record.error.map(error_chain);

        match record.severity {
            Severity::Verbose => {
                tracing::trace!(tag, severity, error = error.as_deref(), "{}", message)
            }
            Severity::Debug => {
                tracing::debug!(tag, severity, error = error.as_deref(), "{}", message)
            }
            Severity::Info => {
                tracing::info!(tag, severity, error = error.as_deref(), "{}", message)
            }
            Severity::Warn => {
                tracing::warn!(tag, severity, error = error.as_deref(), "{}", message)
            }
            Severity::Error => {
                tracing::error!(tag, severity, error = error.as_deref(), "{}", message)
            }
            Severity::Assert => tracing::error!(
                tag,
                severity,
                assert = true,
                error = error.as_deref(),
                "{}",
                message
            ),
        }
    }
}

/// `outer: inner: root` rendering of an error and its sources
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
