//! Logging façade
//!
//! A [`Logger`] tags every message with the call site that invoked it, e.g.
//! `logger.v("Test")` from `Worker::run` line 286 emits the tag
//! `" > Worker:run:286"`. Clones share one disabled flag, so a single
//! `set_disabled(true)` silences every handle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use taolog_core::{Logger, TracingSink};
//!
//! let logger = Logger::new(Arc::new(TracingSink));
//! logger.d("starting");
//! logger.set_disabled(true);
//! logger.d("never emitted");
//! ```

use crate::config::LoggingConfig;
use crate::location::{
    simple_type_name, BacktraceFrameSource, FacadeMatch, FrameSource, LocationResolver,
    TypeResolver,
};
use crate::sink::{LogRecord, LogSink, TracingSink};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use taolog_core_types::schema::{
    THREAD_ID, THREAD_MESSAGE_SEPARATOR, THREAD_NAME, THREAD_TAG_PREFIX,
};
use taolog_core_types::Severity;

/// Module path whose frames count as façade-internal
pub const FACADE_SCOPE: &str = module_path!();

/// Cloneable logging handle
///
/// # Caller frames in optimized builds
///
/// Tags come from the live call stack, so the caller's frame must survive
/// compilation. Debug builds keep it. Release builds may inline the caller
/// or turn its call into a tail call, and the tag then names whichever frame
/// is left (typically a `core::ops` shim with line `-1`). Keep line tables
/// (`debug = "line-tables-only"`) and frame pointers
/// (`-C force-frame-pointers=yes`) in profiles where tags matter.
#[derive(Clone)]
pub struct Logger {
    disabled: Arc<AtomicBool>,
    sink: Arc<dyn LogSink>,
    frames: Arc<dyn FrameSource>,
    resolver: Arc<LocationResolver>,
}

impl Logger {
    /// Logger writing to `sink`, capturing frames with `std::backtrace`
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::builder().sink(sink).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger configured from the `[logging]` table, writing to `sink`
    pub fn from_config(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        Self::builder()
            .sink(sink)
            .facade_match(config.facade_match)
            .disabled(config.disabled)
            .build()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Silence (or re-enable) this logger and every clone of it
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::Relaxed);
    }

    /// Tag of the nearest call site outside the façade, or `"[]: "`
    #[inline(never)]
    pub fn resolve_caller_location(&self) -> String {
        let frames = self.frames.capture();
        self.resolver.resolve(&frames)
    }

    /// `" > (Type)"` followed by the caller location
    #[inline(never)]
    pub fn resolve_tagged_location<T: ?Sized>(&self, _object: &T) -> String {
        let frames = self.frames.capture();
        self.resolver
            .resolve_tagged(simple_type_name::<T>(), &frames)
    }

    #[inline(never)]
    pub fn log(&self, severity: Severity, message: &str) {
        if self.is_disabled() {
            return;
        }
        let tag = self.resolve_caller_location();
        self.emit(severity, &tag, message, None);
    }

    #[inline(never)]
    pub fn log_with_error(
        &self,
        severity: Severity,
        message: &str,
        error: &(dyn Error + 'static),
    ) {
        if self.is_disabled() {
            return;
        }
        let tag = self.resolve_caller_location();
        self.emit(severity, &tag, message, Some(error));
    }

    /// Log an error with an empty message
    #[inline(never)]
    pub fn log_error(&self, severity: Severity, error: &(dyn Error + 'static)) {
        if self.is_disabled() {
            return;
        }
        let tag = self.resolve_caller_location();
        self.emit(severity, &tag, "", Some(error));
    }

    /// Log on behalf of `object`, whose type name prefixes the tag
    #[inline(never)]
    pub fn log_for<T: ?Sized>(
        &self,
        severity: Severity,
        object: &T,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        if self.is_disabled() {
            return;
        }
        let tag = self.resolve_tagged_location(object);
        self.emit(severity, &tag, message, error);
    }

    pub fn v(&self, message: &str) {
        self.log(Severity::Verbose, message);
    }

    pub fn d(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn i(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn w(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn e(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// What a terrible failure: a condition that should never happen
    pub fn wtf(&self, message: &str) {
        self.log(Severity::Assert, message);
    }

    pub fn v_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Verbose, object, message, None);
    }

    pub fn d_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Debug, object, message, None);
    }

    pub fn i_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Info, object, message, None);
    }

    pub fn w_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Warn, object, message, None);
    }

    pub fn e_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Error, object, message, None);
    }

    pub fn wtf_for<T: ?Sized>(&self, object: &T, message: &str) {
        self.log_for(Severity::Assert, object, message, None);
    }

    /// Log the calling thread's name and id at verbose level
    pub fn thread_info(&self) {
        self.thread_report(None);
    }

    /// Log the calling thread's name and id followed by `message`
    pub fn thread_info_with(&self, message: &str) {
        self.thread_report(Some(message));
    }

    #[inline(never)]
    fn thread_report(&self, message: Option<&str>) {
        if self.is_disabled() {
            return;
        }
        let mut body = ThreadInfo::current().to_string();
        if let Some(message) = message {
            body.push_str(THREAD_MESSAGE_SEPARATOR);
            body.push_str(message);
        }
        let tag = format!("{}{}", THREAD_TAG_PREFIX, self.resolve_caller_location());
        self.emit(Severity::Verbose, &tag, &body, None);
    }

    fn emit(
        &self,
        severity: Severity,
        tag: &str,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.sink.emit(&LogRecord {
            severity,
            tag,
            message,
            error,
        });
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("disabled", &self.is_disabled())
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// Defaults: [`TracingSink`], [`BacktraceFrameSource`], symbol-path type
/// names, boundary matching on [`FACADE_SCOPE`], enabled.
pub struct LoggerBuilder {
    sink: Arc<dyn LogSink>,
    frames: Arc<dyn FrameSource>,
    types: Option<Arc<dyn TypeResolver>>,
    matching: FacadeMatch,
    scope: String,
    disabled: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink),
            frames: Arc::new(BacktraceFrameSource),
            types: None,
            matching: FacadeMatch::default(),
            scope: FACADE_SCOPE.to_string(),
            disabled: false,
        }
    }
}

impl LoggerBuilder {
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn frame_source(mut self, frames: Arc<dyn FrameSource>) -> Self {
        self.frames = frames;
        self
    }

    pub fn type_resolver(mut self, types: Arc<dyn TypeResolver>) -> Self {
        self.types = Some(types);
        self
    }

    pub fn facade_match(mut self, matching: FacadeMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Module path whose frames are skipped as façade-internal
    pub fn facade_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn build(self) -> Logger {
        let mut resolver = LocationResolver::new(self.scope).with_matching(self.matching);
        if let Some(types) = self.types {
            resolver = resolver.with_type_resolver(types);
        }
        Logger {
            disabled: Arc::new(AtomicBool::new(self.disabled)),
            sink: self.sink,
            frames: self.frames,
            resolver: Arc::new(resolver),
        }
    }
}

/// Identity of the calling thread
///
/// Rust threads carry no priority or thread group, so only name and id are
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadInfo {
    pub name: Option<String>,
    pub id: ThreadId,
}

impl ThreadInfo {
    pub fn current() -> Self {
        let current = thread::current();
        Self {
            name: current.name().map(str::to_string),
            id: current.id(),
        }
    }
}

impl fmt::Display for ThreadInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{:?}",
            THREAD_NAME,
            self.name.as_deref().unwrap_or("<unnamed>"),
            THREAD_ID,
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_scope_is_this_module() {
        assert_eq!(FACADE_SCOPE, "taolog_core::logger");
    }

    #[test]
    fn test_clones_share_disabled_flag() {
        let logger = Logger::default();
        let clone = logger.clone();
        clone.set_disabled(true);
        assert!(logger.is_disabled());
        logger.set_disabled(false);
        assert!(!clone.is_disabled());
    }

    #[test]
    fn test_thread_info_names_thread() {
        let info = thread::Builder::new()
            .name("worker-7".to_string())
            .spawn(ThreadInfo::current)
            .unwrap()
            .join()
            .unwrap();
        let rendered = info.to_string();
        assert!(rendered.starts_with("Name:worker-7|id:ThreadId("));
    }
}
