//! Façade-skipping scan over a captured stack

use super::frame::CallFrame;
use super::types::{SymbolPathResolver, TypeResolver};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taolog_core_types::schema::{
    FALLBACK_LOCATION, LOCATION_PREFIX, LOCATION_SEPARATOR, OBJECT_PREFIX, OBJECT_SUFFIX,
    UNKNOWN_LINE,
};

/// How a frame's type path is tested against the façade scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacadeMatch {
    /// Equal to the scope, or nested under it at a `::` boundary
    #[default]
    Boundary,
    /// Plain string prefix; also claims unrelated paths such as
    /// `logger_ext` for a scope of `logger`
    Prefix,
}

/// Finds the nearest call site outside the façade and renders its tag
#[derive(Clone)]
pub struct LocationResolver {
    scope: String,
    matching: FacadeMatch,
    types: Arc<dyn TypeResolver>,
}

impl LocationResolver {
    /// Resolver for frames under `scope`, matched at path boundaries and
    /// named by [`SymbolPathResolver`]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            matching: FacadeMatch::Boundary,
            types: Arc::new(SymbolPathResolver),
        }
    }

    pub fn with_matching(mut self, matching: FacadeMatch) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_type_resolver(mut self, types: Arc<dyn TypeResolver>) -> Self {
        self.types = types;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn matching(&self) -> FacadeMatch {
        self.matching
    }

    /// Whether `type_name` belongs to the façade
    pub fn is_facade(&self, type_name: &str) -> bool {
        match self.matching {
            FacadeMatch::Prefix => type_name.starts_with(&self.scope),
            FacadeMatch::Boundary => {
                type_name == self.scope
                    || type_name
                        .strip_prefix(self.scope.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            }
        }
    }

    /// Render the location tag for `frames` (innermost first)
    ///
    /// Frames before the first façade frame are skipped, as are frames whose
    /// type cannot be resolved. Returns `"[]: "` when no external frame
    /// follows the façade.
    pub fn resolve(&self, frames: &[CallFrame]) -> String {
        let mut inside = false;

        for frame in frames {
            let in_facade = self.is_facade(&frame.type_name);
            if !inside {
                inside = in_facade;
                continue;
            }
            if in_facade {
                continue;
            }
            let Ok(simple_name) = self.types.simple_name(&frame.type_name) else {
                continue;
            };
            return render(&simple_name, frame);
        }

        FALLBACK_LOCATION.to_string()
    }

    /// Location tag prefixed with `" > (Name)"`
    pub fn resolve_tagged(&self, object_name: &str, frames: &[CallFrame]) -> String {
        let mut tag = String::with_capacity(object_name.len() + 32);
        tag.push_str(OBJECT_PREFIX);
        tag.push_str(object_name);
        tag.push_str(OBJECT_SUFFIX);
        tag.push_str(&self.resolve(frames));
        tag
    }
}

impl std::fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolver")
            .field("scope", &self.scope)
            .field("matching", &self.matching)
            .finish_non_exhaustive()
    }
}

fn render(simple_name: &str, frame: &CallFrame) -> String {
    let line = frame
        .line
        .map(|l| l.to_string())
        .unwrap_or_else(|| UNKNOWN_LINE.to_string());

    let mut tag = String::with_capacity(
        LOCATION_PREFIX.len() + simple_name.len() + frame.method_name.len() + line.len() + 2,
    );
    tag.push_str(LOCATION_PREFIX);
    tag.push_str(simple_name);
    tag.push_str(LOCATION_SEPARATOR);
    tag.push_str(&frame.method_name);
    tag.push_str(LOCATION_SEPARATOR);
    tag.push_str(&line);
    tag
}
