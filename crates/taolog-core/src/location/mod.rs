//! Caller-location resolution
//!
//! Maps the current call stack to a single display string identifying the
//! call site outside the logging façade:
//!
//! - [`frame`]: the `CallFrame` record and symbol-path parsing
//! - [`capture`]: stack capture via `std::backtrace`
//! - [`types`]: simple-name lookup for declaring types
//! - [`resolver`]: the façade-skipping scan

pub mod capture;
pub mod frame;
pub mod resolver;
pub mod types;

pub use capture::{BacktraceFrameSource, FrameSource};
pub use frame::CallFrame;
pub use resolver::{FacadeMatch, LocationResolver};
pub use types::{simple_type_name, StaticTypeTable, SymbolPathResolver, TypeInfo, TypeResolver};
