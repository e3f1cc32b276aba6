//! Core types shared across taolog facilities
//!
//! This crate provides foundational types used by the logging façade,
//! its sinks and the test capture layer:
//!
//! - **Severity**: the six façade log levels
//! - **Schema constants**: canonical field keys and location tag pieces

pub mod schema;
pub mod severity;

pub use severity::Severity;
