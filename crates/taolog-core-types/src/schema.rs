//! Canonical schema constants for structured logging and location tags
//!
//! These constants keep the sink, the test capture layer and the location
//! resolver in agreement about field names and tag layout.

// Canonical field keys for structured logging
pub const FIELD_TAG: &str = "tag";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_ERROR: &str = "error";
pub const FIELD_ASSERT: &str = "assert";

// Location tag layout: " > Type:method:line"
pub const LOCATION_PREFIX: &str = " > ";
pub const LOCATION_SEPARATOR: &str = ":";
pub const FALLBACK_LOCATION: &str = "[]: ";

/// Rendered in place of a line number the runtime could not report
pub const UNKNOWN_LINE: &str = "-1";

// Object-tagged location: " > (Widget)" + location
pub const OBJECT_PREFIX: &str = " > (";
pub const OBJECT_SUFFIX: &str = ")";

// Thread introspection
pub const THREAD_TAG_PREFIX: &str = "< Thread";
pub const THREAD_NAME: &str = "Name:";
pub const THREAD_ID: &str = "|id:";
pub const THREAD_MESSAGE_SEPARATOR: &str = "> ";
