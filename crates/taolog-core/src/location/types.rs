//! Simple-name lookup for declaring types
//!
//! Rust has no runtime reflection, so a frame's declaring type is resolved
//! from its path text ([`SymbolPathResolver`]) or from an explicit table
//! ([`StaticTypeTable`]).

use super::frame::{is_synthetic, split_path};
use crate::errors::{Result, TaoError};
use std::collections::HashMap;

/// What the resolver knows about a declaring type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Unqualified name; empty for anonymous or synthetic types
    pub simple_name: String,
    /// Lexically enclosing type path, if any
    pub enclosing: Option<String>,
}

impl TypeInfo {
    pub fn named(simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            enclosing: None,
        }
    }

    pub fn anonymous_in(enclosing: impl Into<String>) -> Self {
        Self {
            simple_name: String::new(),
            enclosing: Some(enclosing.into()),
        }
    }
}

/// Resolves a declaring type path to its [`TypeInfo`]
pub trait TypeResolver: Send + Sync {
    /// Fails with [`TaoError::TypeNotResolvable`] when the type is unknown
    fn resolve(&self, type_name: &str) -> Result<TypeInfo>;

    /// Simple name of `type_name`, falling back through enclosing types
    /// while the simple name is empty.
    ///
    /// Only the first lookup can fail; an enclosing type that cannot be
    /// resolved ends the walk with an empty name.
    fn simple_name(&self, type_name: &str) -> Result<String> {
        let mut info = self.resolve(type_name)?;
        for _ in 0..MAX_ENCLOSING_DEPTH {
            if !info.simple_name.is_empty() {
                return Ok(info.simple_name);
            }
            info = match info.enclosing.as_deref().map(|outer| self.resolve(outer)) {
                Some(Ok(outer)) => outer,
                _ => return Ok(String::new()),
            };
        }
        Ok(String::new())
    }
}

/// Bounds the enclosing-type walk for tables that nest a type in itself
const MAX_ENCLOSING_DEPTH: usize = 32;

/// Resolves Rust symbol paths by their last segment
///
/// `app::worker::Worker` resolves to `Worker`. A synthetic last segment such
/// as `{{closure}}` is anonymous and encloses into its parent path. Empty
/// paths and `<unknown>` do not resolve.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolPathResolver;

impl TypeResolver for SymbolPathResolver {
    fn resolve(&self, type_name: &str) -> Result<TypeInfo> {
        let trimmed = type_name.trim();
        if trimmed.is_empty() || trimmed == "<unknown>" {
            return Err(not_resolvable(type_name));
        }

        let segments = split_path(trimmed);
        let Some((last, parents)) = segments.split_last() else {
            return Err(not_resolvable(type_name));
        };

        if is_synthetic(last) {
            if parents.is_empty() {
                return Ok(TypeInfo::named(""));
            }
            return Ok(TypeInfo::anonymous_in(parents.join("::")));
        }

        Ok(TypeInfo::named(*last))
    }
}

/// Lookup table of known types
///
/// Types missing from the table do not resolve.
#[derive(Debug, Default, Clone)]
pub struct StaticTypeTable {
    entries: HashMap<String, TypeInfo>,
}

impl StaticTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named type
    pub fn with_type(mut self, type_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        self.entries
            .insert(type_name.into(), TypeInfo::named(simple_name));
        self
    }

    /// Register an anonymous type nested in `enclosing`
    pub fn with_anonymous(
        mut self,
        type_name: impl Into<String>,
        enclosing: impl Into<String>,
    ) -> Self {
        self.entries
            .insert(type_name.into(), TypeInfo::anonymous_in(enclosing));
        self
    }

    pub fn insert(&mut self, type_name: impl Into<String>, info: TypeInfo) {
        self.entries.insert(type_name.into(), info);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TypeResolver for StaticTypeTable {
    fn resolve(&self, type_name: &str) -> Result<TypeInfo> {
        self.entries
            .get(type_name)
            .cloned()
            .ok_or_else(|| not_resolvable(type_name))
    }
}

fn not_resolvable(type_name: &str) -> TaoError {
    TaoError::TypeNotResolvable {
        type_name: type_name.to_string(),
    }
}

/// Simple name of `T`: `app::model::Widget<u8>` -> `Widget`
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    simple_name_of(std::any::type_name::<T>())
}

fn simple_name_of(full: &'static str) -> &'static str {
    let without_generics = match full.find('<') {
        Some(0) | None => full,
        Some(pos) => &full[..pos],
    };
    let without_refs = without_generics.trim_start_matches(['&', '*']);
    without_refs
        .rsplit("::")
        .next()
        .unwrap_or(without_refs)
        .trim_start_matches("mut ")
        .trim_start_matches("dyn ")
}
