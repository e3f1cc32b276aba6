//! Debug renderings of maps and structured values
//!
//! Values are inspected through `serde`: any `Serialize` type renders as
//! its serialized fields, in declaration order.
//!
//! ```
//! use serde::Serialize;
//! use taolog_core::formatter::to_line;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! assert_eq!(to_line(&Point { x: 1, y: 2 }), "Point [x=1, y=2]");
//! ```

use crate::location::simple_type_name;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Write as _};

const FIELD_PREFIX: char = '|';
const HALF_LINE: &str = "---------------------";
const LINE: &str = "----------------------------------------------------------\n";

/// One entry per line, keys padded to the longest key
///
/// ```text
/// --------------------- Map ---------------------
/// a    = 1
/// long = 2
/// ----------------------------------------------------------
/// ```
pub fn map_to_lines<K, V, I>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let entries: Vec<(String, String)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let width = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(HALF_LINE);
    out.push_str(" Map ");
    out.push_str(HALF_LINE);
    out.push('\n');
    for (key, value) in &entries {
        let _ = writeln!(out, "{:<width$} = {}", key, value, width = width);
    }
    out.push_str(LINE);
    out
}

/// One field per line under a header naming the type
///
/// ```text
/// ---------------------Point---------------------
/// |x = 1
/// |y = 2
/// ----------------------------------------------------------
/// ```
pub fn to_lines<T: Serialize + ?Sized>(value: &T) -> String {
    let name = simple_type_name::<T>();

    let mut out = String::new();
    out.push_str(HALF_LINE);
    out.push_str(name);
    out.push_str(HALF_LINE);
    out.push('\n');

    match fields_of(value) {
        Ok(fields) => {
            let width = fields.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
            for (key, rendered) in &fields {
                let _ = writeln!(
                    out,
                    "{}{:<width$} = {}",
                    FIELD_PREFIX,
                    key,
                    rendered,
                    width = width
                );
            }
        }
        Err(err) => {
            let _ = writeln!(out, "{}Can't access to fields of {}: {}", FIELD_PREFIX, name, err);
        }
    }

    out.push_str(LINE);
    out
}

/// All fields on one line: `Point [x=1, y=2]`
pub fn to_line<T: Serialize + ?Sized>(value: &T) -> String {
    let name = simple_type_name::<T>();

    let body = match fields_of(value) {
        Ok(fields) => fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", "),
        Err(err) => format!("{}Can't access to fields of {}: {}", FIELD_PREFIX, name, err),
    };

    format!("{} [{}]", name, body)
}

/// Serialized fields as `(name, rendered value)`; non-struct values become a
/// single `value` field
fn fields_of<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>, serde_json::Error> {
    let fields = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| (k, render_value(&v)))
            .collect(),
        other => vec![("value".to_string(), render_value(&other))],
    };
    Ok(fields)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        id: u32,
        title: String,
    }

    #[test]
    fn test_to_line_keeps_declaration_order() {
        let sample = Sample {
            id: 7,
            title: "seven".to_string(),
        };
        assert_eq!(to_line(&sample), "Sample [id=7, title=seven]");
    }

    #[test]
    fn test_to_line_single_field_has_no_separator() {
        #[derive(Serialize)]
        struct One {
            only: bool,
        }
        assert_eq!(to_line(&One { only: true }), "One [only=true]");
    }

    #[test]
    fn test_map_to_lines_empty() {
        let empty: Vec<(String, String)> = Vec::new();
        let rendered = map_to_lines(empty);
        assert_eq!(
            rendered,
            format!("{} Map {}\n{}", HALF_LINE, HALF_LINE, LINE)
        );
    }

    #[test]
    fn test_scalar_renders_value_field() {
        assert_eq!(to_line(&5u8), "u8 [value=5]");
    }
}
