//! Stack capture
//!
//! Frames come from `std::backtrace::Backtrace`, whose rendering is parsed
//! back into [`CallFrame`]s. The rendering lists one symbol per line,
//! optionally followed by an `at file:line:col` line.

use super::frame::CallFrame;
use std::backtrace::Backtrace;

/// Produces the call stack of the current thread, innermost first
pub trait FrameSource: Send + Sync {
    fn capture(&self) -> Vec<CallFrame>;
}

/// Frame source backed by `std::backtrace`
///
/// Captures regardless of `RUST_BACKTRACE`. Line numbers require debug info
/// (line tables at least); without it frames carry no line. Frames the
/// optimizer inlined or replaced by a tail call are absent from the capture.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceFrameSource;

impl FrameSource for BacktraceFrameSource {
    #[inline(never)]
    fn capture(&self) -> Vec<CallFrame> {
        let backtrace = Backtrace::force_capture();
        parse_backtrace(&backtrace.to_string())
    }
}

/// Parse a rendered backtrace into frames
pub fn parse_backtrace(rendered: &str) -> Vec<CallFrame> {
    let mut frames = Vec::new();
    let mut pending: Option<String> = None;

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(symbol) = pending.take() {
                frames.push(CallFrame::from_symbol(&symbol, parse_line_number(location)));
            }
            continue;
        }

        if let Some(symbol) = pending.take() {
            frames.push(CallFrame::from_symbol(&symbol, None));
        }
        pending = Some(strip_frame_prefix(trimmed).to_string());
    }

    if let Some(symbol) = pending {
        frames.push(CallFrame::from_symbol(&symbol, None));
    }

    frames
}

/// `"  4: app::main"` -> `"app::main"`, also dropping a full-format
/// `"0x55d0c - "` instruction pointer.
fn strip_frame_prefix(line: &str) -> &str {
    let mut rest = line;
    if let Some((index, tail)) = rest.split_once(": ") {
        if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
            rest = tail.trim_start();
        }
    }
    if rest.starts_with("0x") {
        if let Some((_, tail)) = rest.split_once(" - ") {
            rest = tail;
        }
    }
    rest
}

/// `file:line:col` or `file:line` -> line
fn parse_line_number(location: &str) -> Option<u32> {
    let mut parts = location.rsplit(':');
    let last = parts.next()?.trim().parse::<u32>().ok()?;
    match parts.next().and_then(|p| p.trim().parse::<u32>().ok()) {
        Some(line) => Some(line),
        None => Some(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "   0: taolog_core::location::capture::BacktraceFrameSource::capture
             at ./src/location/capture.rs:25:25
   1: taolog_core::logger::Logger::resolve_caller_location
             at ./src/logger.rs:120:22
   2: app::worker::Worker::run::{{closure}}
             at ./src/worker.rs:42:9
   3: <unknown>
   4: std::rt::lang_start_internal
             at /rustc/abc/library/std/src/rt.rs:148:20
";

    #[test]
    fn test_parse_rendered_backtrace() {
        let frames = parse_backtrace(RENDERED);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[1].type_name, "taolog_core::logger::Logger");
        assert_eq!(frames[1].method_name, "resolve_caller_location");
        assert_eq!(frames[1].line, Some(120));
        assert_eq!(frames[2].type_name, "app::worker::Worker");
        assert_eq!(frames[2].line, Some(42));
    }

    #[test]
    fn test_frame_without_location_has_no_line() {
        let frames = parse_backtrace(RENDERED);
        assert_eq!(frames[3].type_name, "");
        assert_eq!(frames[3].line, None);
    }

    #[test]
    fn test_full_format_instruction_pointer_stripped() {
        let frames = parse_backtrace("  0:     0x55d0c1a2 - app::main\n     at src/main.rs:3:5\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].type_name, "app");
        assert_eq!(frames[0].method_name, "main");
        assert_eq!(frames[0].line, Some(3));
    }

    #[test]
    fn test_line_without_column() {
        assert_eq!(parse_line_number("src/main.rs:17"), Some(17));
        assert_eq!(parse_line_number("src/main.rs:17:4"), Some(17));
        assert_eq!(parse_line_number("src/main.rs"), None);
    }

    #[test]
    fn test_live_capture_is_innermost_first() {
        let frames = BacktraceFrameSource.capture();
        assert!(!frames.is_empty());
    }
}
