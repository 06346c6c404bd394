//! Turns [`TypeError`] records into one-line, human-readable diagnostics.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matcher::{PathSegment, TypeError};
use crate::spec::TypeSpec;
use crate::value::{Key, Value};

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier regex"));

/// Strings are single-quoted with inner quotes escaped; everything else uses
/// its default textual form.
pub fn repr(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

pub fn repr_key(key: &Key) -> String {
    match key {
        Key::Str(s) => quote(s),
        other => other.to_string(),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "\\'"))
}

/// Folds a path left to right. `None` when nothing describes the location.
pub fn where_to_description(path: &[PathSegment]) -> Option<String> {
    let mut acc: Option<String> = None;
    for segment in path {
        // an empty base describes nothing, here and as a prefix
        let prefix = acc.filter(|s| !s.is_empty());
        acc = Some(match (segment, prefix) {
            (PathSegment::Base(name), _) => name.clone(),
            (PathSegment::TableKey(key), None) => format!("key {}", repr_key(key)),
            (PathSegment::TableKey(key), Some(s)) => format!("key {} of {s}", repr_key(key)),
            (PathSegment::TableValue(key), None) => format!("table entry {}", repr_key(key)),
            (PathSegment::TableValue(key), Some(s)) => match key.as_str() {
                Some(name) if IDENT_RE.is_match(name) => format!("{s}.{name}"),
                _ => format!("{s}[{}]", repr_key(key)),
            },
        });
    }
    acc.filter(|s| !s.is_empty())
}

/// Deliberately coarse for containers: no field or element detail.
pub fn type_to_description(spec: &TypeSpec) -> String {
    match spec {
        TypeSpec::Primitive(p) => p.name().to_owned(),
        TypeSpec::Literal(v) => repr(v),
        TypeSpec::Optional(inner) => format!("optional {}", type_to_description(inner)),
        TypeSpec::Union(options) => options
            .iter()
            .map(type_to_description)
            .collect::<Vec<_>>()
            .join(" or "),
        TypeSpec::KeyedTable { .. } => "table".to_owned(),
        TypeSpec::Struct(_) => "structural table".to_owned(),
        TypeSpec::Array(_) => "array table".to_owned(),
    }
}

pub fn type_error_to_string(error: &TypeError<'_>) -> String {
    let location = match where_to_description(&error.path) {
        Some(w) => format!(" in {w}"),
        None => String::new(),
    };
    format!(
        "Unexpected value{location}. Found: {} Expected: value of type {}",
        repr(&error.value),
        type_to_description(error.expected),
    )
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&type_to_description(self))
    }
}

impl fmt::Display for TypeError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&type_error_to_string(self))
    }
}
