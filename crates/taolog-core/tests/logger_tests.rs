#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{recording_logger, scripted_logger, ScriptedFrames};
use std::error::Error;
use std::sync::Arc;
use taolog_core::location::StaticTypeTable;
use taolog_core::{log_d, log_e, log_i, log_v, log_w, log_wtf};
use taolog_core::{CallFrame, Logger, Severity};

struct Widget;

#[test]
fn test_log_tags_with_external_caller() {
    let (logger, sink, frames) = scripted_logger(ScriptedFrames::caller_at_42());

    logger.v("hello");

    let record = sink.last().expect("one record");
    assert_eq!(record.tag, " > Caller:do_work:42");
    assert_eq!(record.message, "hello");
    assert_eq!(record.severity, Severity::Verbose);
    assert_eq!(frames.captures(), 1);
}

#[test]
fn test_each_shortcut_uses_its_severity() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());

    logger.v("m");
    logger.d("m");
    logger.i("m");
    logger.w("m");
    logger.e("m");
    logger.wtf("m");

    let severities: Vec<Severity> = sink.records().iter().map(|r| r.severity).collect();
    assert_eq!(severities, Severity::ALL.to_vec());
}

#[test]
fn test_error_is_forwarded_to_sink() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());
    let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");

    logger.log_with_error(Severity::Error, "write failed", &err);
    logger.log_error(Severity::Warn, &err);

    let records = sink.records();
    assert_eq!(records[0].message, "write failed");
    assert_eq!(records[0].error.as_deref(), Some("disk full"));
    assert_eq!(records[1].message, "");
    assert_eq!(records[1].severity, Severity::Warn);
    assert_eq!(records[1].error.as_deref(), Some("disk full"));
}

#[test]
fn test_object_tag_prefixes_simple_type_name() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());

    assert_eq!(
        logger.resolve_tagged_location(&Widget),
        " > (Widget) > Caller:do_work:42"
    );

    logger.i_for(&Widget, "ready");
    let record = sink.last().unwrap();
    assert_eq!(record.tag, " > (Widget) > Caller:do_work:42");
    assert_eq!(record.severity, Severity::Info);
}

#[test]
fn test_object_tag_equals_prefix_plus_plain_location() {
    let (logger, _sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());

    let plain = logger.resolve_caller_location();
    let tagged = logger.resolve_tagged_location(&Widget);

    assert_eq!(tagged, format!(" > (Widget){}", plain));
}

#[test]
fn test_disabled_logger_touches_neither_resolver_nor_sink() {
    let (logger, sink, frames) = scripted_logger(ScriptedFrames::caller_at_42());
    let err = std::io::Error::new(std::io::ErrorKind::Other, "ignored");

    logger.set_disabled(true);

    logger.v("m");
    logger.d("m");
    logger.i("m");
    logger.w("m");
    logger.e("m");
    logger.wtf("m");
    logger.log_with_error(Severity::Error, "m", &err);
    logger.log_error(Severity::Error, &err);
    logger.v_for(&Widget, "m");
    logger.wtf_for(&Widget, "m");
    logger.log_for(Severity::Debug, &Widget, "m", Some(&err as &(dyn Error + 'static)));
    logger.thread_info();
    logger.thread_info_with("m");
    log_v!(logger, "formatted {}", 1);
    log_e!(logger, err = &err, "formatted {}", 2);

    assert_eq!(sink.count(), 0, "sink must receive nothing");
    assert_eq!(frames.captures(), 0, "stack must never be captured");
}

#[test]
fn test_disable_through_clone_silences_original() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());
    let handle = logger.clone();

    handle.set_disabled(true);
    logger.i("suppressed");
    assert_eq!(sink.count(), 0);

    handle.set_disabled(false);
    logger.i("delivered");
    assert_eq!(sink.count(), 1);
}

#[test]
fn test_toggle_is_idempotent_and_reflects_last_call() {
    let logger = Logger::default();
    assert!(!logger.is_disabled(), "enabled by default");

    logger.set_disabled(true);
    logger.set_disabled(true);
    assert!(logger.is_disabled());

    logger.set_disabled(false);
    assert!(!logger.is_disabled());

    logger.set_disabled(false);
    assert!(!logger.is_disabled());
}

#[test]
fn test_builder_starts_disabled() {
    let logger = Logger::builder().disabled(true).build();
    assert!(logger.is_disabled());
}

#[test]
fn test_thread_info_format() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());

    std::thread::Builder::new()
        .name("io-worker".to_string())
        .spawn(move || logger.thread_info_with("busy"))
        .unwrap()
        .join()
        .unwrap();

    let record = sink.last().unwrap();
    assert_eq!(record.severity, Severity::Verbose);
    assert_eq!(record.tag, "< Thread > Caller:do_work:42");
    assert!(record.message.starts_with("Name:io-worker|id:ThreadId("));
    assert!(record.message.ends_with("> busy"));
}

#[test]
fn test_macros_format_and_forward() {
    let (logger, sink, _frames) = scripted_logger(ScriptedFrames::caller_at_42());
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");

    log_v!(logger, "v {}", 1);
    log_d!(logger, "d {}", 2);
    log_i!(logger, "i {}", 3);
    log_w!(logger, "w {}", 4);
    log_e!(logger, err = &err, "e {}", 5);
    log_wtf!(logger, "wtf");

    let records = sink.records();
    let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["v 1", "d 2", "i 3", "w 4", "e 5", "wtf"]);
    assert_eq!(records[4].error.as_deref(), Some("no such file"));
    assert_eq!(records[5].severity, Severity::Assert);
}

#[test]
fn test_facade_only_stack_logs_fallback_tag() {
    let frames = ScriptedFrames::new(vec![CallFrame::new(
        "taolog_core::logger::Logger",
        "log",
        Some(1),
    )]);
    let (logger, sink, _frames) = scripted_logger(frames);

    logger.d("orphan");

    assert_eq!(sink.last().unwrap().tag, "[]: ");
}

#[test]
fn test_custom_type_resolver_is_used() {
    let sink = Arc::new(common::RecordingSink::default());
    let frames = Arc::new(ScriptedFrames::new(vec![
        CallFrame::new("ua.tao.Log", "v", Some(1)),
        CallFrame::new("ua.tao.Screen$1", "onClick", Some(31)),
    ]));
    let table = StaticTypeTable::new()
        .with_type("ua.tao.Screen", "Screen")
        .with_anonymous("ua.tao.Screen$1", "ua.tao.Screen");
    let logger = Logger::builder()
        .sink(sink.clone())
        .frame_source(frames)
        .facade_scope("ua.tao.Log")
        .facade_match(taolog_core::FacadeMatch::Prefix)
        .type_resolver(Arc::new(table))
        .build();

    logger.v("clicked");

    assert_eq!(sink.last().unwrap().tag, " > Screen:onClick:31");
}

#[test]
fn test_live_resolution_names_the_calling_test() {
    let (logger, sink) = recording_logger();

    let tag = logger.resolve_caller_location();
    assert!(
        tag.starts_with(" > logger_tests:test_live_resolution_names_the_calling_test:"),
        "unexpected tag {tag:?}"
    );

    logger.d("live");
    assert!(sink
        .last()
        .unwrap()
        .tag
        .starts_with(" > logger_tests:test_live_resolution_names_the_calling_test:"));
}

#[test]
fn test_live_resolution_inside_closure() {
    let (logger, _sink) = recording_logger();

    let tag = (|| logger.resolve_caller_location())();

    assert!(
        tag.starts_with(" > logger_tests:test_live_resolution_inside_closure::{"),
        "unexpected tag {tag:?}"
    );
}

#[inline(never)]
fn resolve_here(logger: &Logger) -> (String, u32) {
    (logger.resolve_caller_location(), line!())
}

#[test]
fn test_live_resolution_reports_exact_call_line() {
    let (logger, _sink) = recording_logger();

    let (tag, line) = resolve_here(&logger);

    assert_eq!(tag, format!(" > logger_tests:resolve_here:{}", line));
}
