//! Subscriber setup for the logging façade
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Formatting macros (`log_v!`, `log_d!`, `log_i!`, `log_w!`, `log_e!`, `log_wtf!`)
//! - Test capture mode for deterministic assertions on emitted records
//!
//! # Usage
//!
//! ```rust
//! use taolog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
