use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taolog_core::location::FrameSource;
use taolog_core::logger::FACADE_SCOPE;
use taolog_core::sink::error_chain;
use taolog_core::{CallFrame, LogRecord, LogSink, Logger, Severity};

/// A record as the sink received it, with owned fields
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    pub error: Option<String>,
}

/// Sink that keeps every record for later assertions
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Emitted>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn records(&self) -> Vec<Emitted> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Emitted> {
        self.records.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, record: &LogRecord<'_>) {
        let emitted = Emitted {
            severity: record.severity,
            tag: record.tag.to_string(),
            message: record.message.to_string(),
            error: record.error.map(error_chain),
        };
        self.records.lock().map(|mut r| r.push(emitted)).ok();
    }
}

/// Frame source replaying a fixed stack and counting captures
pub struct ScriptedFrames {
    frames: Vec<CallFrame>,
    captures: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedFrames {
    pub fn new(frames: Vec<CallFrame>) -> Self {
        Self {
            frames,
            captures: AtomicUsize::new(0),
        }
    }

    /// Façade frames followed by `app::Caller::do_work` at line 42
    pub fn caller_at_42() -> Self {
        Self::new(vec![
            CallFrame::new(format!("{}::Logger", FACADE_SCOPE), "log", Some(120)),
            CallFrame::new(format!("{}::Logger", FACADE_SCOPE), "v", Some(140)),
            CallFrame::new("app::Caller", "do_work", Some(42)),
            CallFrame::new("app", "main", Some(3)),
        ])
    }

    pub fn captures(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }
}

impl FrameSource for ScriptedFrames {
    fn capture(&self) -> Vec<CallFrame> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        self.frames.clone()
    }
}

/// Logger wired to a recording sink and a scripted stack
#[allow(dead_code)]
pub fn scripted_logger(
    frames: ScriptedFrames,
) -> (Logger, Arc<RecordingSink>, Arc<ScriptedFrames>) {
    let sink = Arc::new(RecordingSink::default());
    let frames = Arc::new(frames);
    let logger = Logger::builder()
        .sink(sink.clone())
        .frame_source(frames.clone())
        .build();
    (logger, sink, frames)
}

/// Logger wired to a recording sink and the real backtrace
#[allow(dead_code)]
pub fn recording_logger() -> (Logger, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let logger = Logger::new(sink.clone());
    (logger, sink)
}
