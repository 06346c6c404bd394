//! Walks a value and a spec in lock-step.
//!
//! Each node gets a shallow check first (runtime kind, literal equality,
//! container shape). Only when that passes, and the depth budget allows,
//! does the walk descend into container contents. Failures are collected as
//! [`TypeError`] records carrying the path to the offending sub-value.
//!
//! Reporting policy per node:
//! - `Union`: errors of the first option with none, else of the LAST option.
//! - `KeyedTable` / `Array`: stop at the first failing entry.
//! - `Struct`: every declared field is checked and all failures are kept.
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::AssertError;
use crate::spec::{Primitive, TypeSpec};
use crate::value::{Key, Table, Value};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// Bound on container-content descent. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Root label used in diagnostics.
    pub name: Option<String>,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Base(String),
    TableKey(Key),   // the key side of an entry
    TableValue(Key), // the value side of the entry at this key
}

/// One structural mismatch.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeError<'a> {
    pub value: Cow<'a, Value>,
    pub expected: &'a TypeSpec,
    pub path: Vec<PathSegment>,
}

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

pub fn get_type_errors<'a>(
    value: &'a Value,
    spec: &'a TypeSpec,
    options: &CheckOptions,
) -> Vec<TypeError<'a>> {
    let matcher = Matcher { max_depth: options.max_depth };
    let mut path = Vec::new();
    if let Some(name) = &options.name {
        path.push(PathSegment::Base(name.clone()));
    }
    matcher.errors(Cow::Borrowed(value), spec, &mut path, 0)
}

/// Rendered diagnostics, one line per error.
pub fn check_value(value: &Value, spec: &TypeSpec, options: &CheckOptions) -> Vec<String> {
    get_type_errors(value, spec, options)
        .iter()
        .map(crate::render::type_error_to_string)
        .collect()
}

pub fn assert_value(
    value: &Value,
    spec: &TypeSpec,
    options: &CheckOptions,
) -> Result<(), AssertError> {
    let messages = check_value(value, spec, options);
    if messages.is_empty() {
        return Ok(());
    }
    tracing::debug!(
        errors = messages.len(),
        name = options.name.as_deref().unwrap_or(""),
        "value rejected"
    );
    Err(AssertError::Mismatch { messages })
}

/// Unbounded deep check.
pub fn matches(value: &Value, spec: &TypeSpec) -> bool {
    get_type_errors(value, spec, &CheckOptions::default()).is_empty()
}

/// A spec paired with its options, for repeated checks.
#[derive(Clone, Debug)]
pub struct Checker {
    spec: TypeSpec,
    options: CheckOptions,
}

impl Checker {
    pub fn new(spec: TypeSpec) -> Self {
        Self { spec, options: CheckOptions::default() }
    }
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = Some(max_depth);
        self
    }
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }
    pub fn errors<'a>(&'a self, value: &'a Value) -> Vec<TypeError<'a>> {
        get_type_errors(value, &self.spec, &self.options)
    }
    pub fn check(&self, value: &Value) -> Vec<String> {
        check_value(value, &self.spec, &self.options)
    }
    pub fn assert(&self, value: &Value) -> Result<(), AssertError> {
        assert_value(value, &self.spec, &self.options)
    }
    /// Check a JSON document as the host would see it once loaded.
    pub fn check_json(&self, json: &serde_json::Value) -> Vec<String> {
        self.check(&Value::from(json))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL
// ————————————————————————————————————————————————————————————————————————————

struct Matcher {
    max_depth: Option<usize>,
}

impl Matcher {
    fn errors<'a>(
        &self,
        value: Cow<'a, Value>,
        spec: &'a TypeSpec,
        path: &mut Vec<PathSegment>,
        depth: usize,
    ) -> Vec<TypeError<'a>> {
        if !value_is_type_no_table(&value, spec) {
            return vec![TypeError { value, expected: spec, path: path.clone() }];
        }
        let descend = self.max_depth.is_none_or(|max| depth < max);

        match spec {
            TypeSpec::Primitive(_) | TypeSpec::Literal(_) => Vec::new(),

            // unwrapping never spends depth
            TypeSpec::Optional(inner) => {
                if value.is_nil() {
                    return Vec::new();
                }
                self.errors(value, inner, path, depth)
            }

            TypeSpec::Union(options) => {
                let mut last = Vec::new();
                for (i, option) in options.iter().enumerate() {
                    let errs = self.errors(value.clone(), option, path, depth);
                    if errs.is_empty() {
                        tracing::trace!(option = i, "union option matched");
                        return errs;
                    }
                    last = errs;
                }
                tracing::trace!(options = options.len(), "no union option matched");
                last
            }

            TypeSpec::KeyedTable { .. } | TypeSpec::Struct(_) | TypeSpec::Array(_) if !descend => {
                Vec::new()
            }

            TypeSpec::KeyedTable { key: key_ty, value: value_ty } => {
                let Some(table) = borrowed_table(&value) else { return Vec::new() };
                for (key, entry) in table.iter() {
                    let mut errs = Vec::new();
                    path.push(PathSegment::TableKey(key.clone()));
                    errs.extend(self.errors(Cow::Owned(key.to_value()), key_ty, path, depth + 1));
                    path.pop();
                    path.push(PathSegment::TableValue(key.clone()));
                    errs.extend(self.errors(Cow::Borrowed(entry), value_ty, path, depth + 1));
                    path.pop();
                    if !errs.is_empty() {
                        return errs;
                    }
                }
                Vec::new()
            }

            TypeSpec::Struct(fields) => {
                let Some(table) = borrowed_table(&value) else { return Vec::new() };
                let mut errs = Vec::new();
                for (name, field_ty) in fields {
                    let key = Key::Str(name.clone());
                    let field = table.get_or_nil(&key);
                    path.push(PathSegment::TableValue(key));
                    errs.extend(self.errors(Cow::Borrowed(field), field_ty, path, depth + 1));
                    path.pop();
                }
                errs
            }

            TypeSpec::Array(elem_ty) => {
                let Some(table) = borrowed_table(&value) else { return Vec::new() };
                for (index, elem) in table.sequence_iter() {
                    path.push(PathSegment::TableValue(Key::Int(index)));
                    let errs = self.errors(Cow::Borrowed(elem), elem_ty, path, depth + 1);
                    path.pop();
                    if !errs.is_empty() {
                        return errs;
                    }
                }
                Vec::new()
            }
        }
    }
}

/// Shallow satisfaction: never looks inside containers.
pub fn value_is_type_no_table(value: &Value, spec: &TypeSpec) -> bool {
    match spec {
        TypeSpec::Primitive(Primitive::Any) => true,
        TypeSpec::Primitive(Primitive::Never) => false,
        TypeSpec::Primitive(p) => value.type_name() == p.name(),
        TypeSpec::Literal(expected) => value == expected,
        TypeSpec::Optional(inner) => value.is_nil() || value_is_type_no_table(value, inner),
        TypeSpec::Union(options) => options.iter().any(|o| value_is_type_no_table(value, o)),
        TypeSpec::KeyedTable { .. } | TypeSpec::Struct(_) | TypeSpec::Array(_) => {
            matches!(value, Value::Table(_))
        }
    }
}

// Only borrowed values can be tables: owned values come from the key side of
// an entry, and keys are scalars.
fn borrowed_table<'a>(value: &Cow<'a, Value>) -> Option<&'a Table> {
    match value {
        Cow::Borrowed(v) => match *v {
            Value::Table(t) => Some(t),
            _ => None,
        },
        Cow::Owned(_) => None,
    }
}
