//! Call frame records and symbol-path parsing

use std::fmt;

/// One level of a captured call stack, innermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Fully-qualified declaring path, e.g. `app::worker::Worker`
    pub type_name: String,
    pub method_name: String,
    /// Source line, when debug info was available
    pub line: Option<u32>,
}

impl CallFrame {
    pub fn new(
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        line: Option<u32>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            method_name: method_name.into(),
            line,
        }
    }

    /// Build a frame from a demangled symbol such as
    /// `app::worker::Worker::run::{{closure}}`.
    ///
    /// The last non-synthetic segment is the method; trailing synthetic
    /// segments (closures, shims) stay attached to it. Everything before the
    /// method is the declaring type path. A symbol without any path yields an
    /// empty type name.
    pub fn from_symbol(symbol: &str, line: Option<u32>) -> Self {
        let segments = normalize_segments(symbol.trim());

        let mut method_end = segments.len();
        while method_end > 0 && is_synthetic(&segments[method_end - 1]) {
            method_end -= 1;
        }

        if method_end == 0 {
            return Self::new("", segments.join("::"), line);
        }

        let method_start = method_end - 1;
        let type_name = segments[..method_start].join("::");
        let method_name = segments[method_start..].join("::");
        Self::new(type_name, method_name, line)
    }
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.type_name, self.method_name)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        Ok(())
    }
}

/// A segment the compiler synthesized rather than one the author named
pub(crate) fn is_synthetic(segment: &str) -> bool {
    segment.starts_with('{')
}

/// Split a path on top-level `::`, ignoring separators nested in `<...>` or
/// `{...}`.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'{' | b'(' | b'[' => depth += 1,
            // `->` inside fn pointer types is not a closing bracket
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' | b'}' | b')' | b']' => depth -= 1,
            b':' if depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b':' => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments.retain(|s| !s.is_empty());
    segments
}

/// Split a symbol into path segments, expanding `<T as Trait>` qualified
/// prefixes to `T`'s path and dropping `::<..>` generic argument segments
/// and the trailing `::h<hash>` of full-format symbols.
fn normalize_segments(symbol: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut segments = split_path(symbol);
    if segments.len() > 1 && segments.last().is_some_and(|s| is_symbol_hash(s)) {
        segments.pop();
    }

    for (index, raw) in segments.into_iter().enumerate() {
        if raw.starts_with('<') && raw.ends_with('>') {
            if index > 0 {
                continue;
            }
            let inner = &raw[1..raw.len() - 1];
            let self_ty = split_as(inner);
            let self_ty = strip_type_sigils(self_ty);
            out.extend(normalize_segments(self_ty));
            continue;
        }
        let plain = match raw.find('<') {
            Some(pos) if pos > 0 && !is_synthetic(raw) => &raw[..pos],
            _ => raw,
        };
        out.push(plain.to_string());
    }

    out
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// `T as Trait` -> `T`, respecting nested brackets
fn split_as(inner: &str) -> &str {
    let bytes = inner.as_bytes();
    let mut depth: i32 = 0;
    for i in 0..bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' | b')' | b']' => depth -= 1,
            b' ' if depth == 0 && inner[i..].starts_with(" as ") => return &inner[..i],
            _ => {}
        }
    }
    inner
}

fn strip_type_sigils(ty: &str) -> &str {
    let mut ty = ty.trim();
    loop {
        let next = ty
            .trim_start_matches(['&', '*'])
            .trim_start_matches("mut ")
            .trim_start_matches("const ")
            .trim_start_matches("dyn ")
            .trim_start();
        if next == ty {
            return ty;
        }
        ty = next;
    }
}
