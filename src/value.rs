//! Host value model.
//!
//! Everything the matcher inspects is a [`Value`]. Containers are a single
//! [`Table`] type: an insertion-ordered map that holds integer keys (the
//! array part) and named keys (the record part) side by side, so arrays,
//! records and mixed containers all satisfy the same "table-like" shape.
pub mod key;
pub mod table;

use std::fmt;
use std::sync::Arc;

pub use key::Key;
pub use table::Table;

// ------------------------------ Value ------------------------------------ //

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
    Function(FunctionRef),
    Table(Table),
}

/// Opaque handle naming a host function. Two handles are equal when their
/// names are.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionRef(Arc<str>);

impl FunctionRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Value {
    /// Runtime type tag, as compared against primitive specs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
            Value::Table(_) => "table",
        }
    }
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// Integral finite numbers print without a fractional part (`42`, not `42.0`);
/// very large or very small magnitudes switch to exponent form (`1e20`).
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return format!("{n}");
    }
    let magnitude = n.abs();
    if n.fract() == 0.0 && magnitude < 1e15 {
        format!("{}", n as i64)
    } else if magnitude >= 1e15 || magnitude < 1e-5 {
        format!("{n:e}")
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Function(func) => write!(f, "function: {}", func.name()),
            Value::Table(t) => write!(f, "table: {} entries", t.len()),
        }
    }
}

// ---------------------------- Conversions -------------------------------- //

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}
impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}
impl From<FunctionRef> for Value {
    fn from(func: FunctionRef) -> Self {
        Value::Function(func)
    }
}

/// JSON documents map onto tables the way a host would load them:
/// arrays become sequences starting at index 1, objects keep document order,
/// and `null` members are simply absent.
impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Boolean(*b),
            // u64 beyond 2^53 loses precision, same as any f64 host
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(xs) => Value::Table(Table::sequence(xs.iter().map(Value::from))),
            Json::Object(m) => {
                let mut table = Table::new();
                for (k, v) in m {
                    table.insert(Key::Str(k.clone()), Value::from(v));
                }
                Value::Table(table)
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_follow_runtime_kind() {
        assert_eq!(Value::Nil.type_name(), "nil");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from(1.5).type_name(), "number");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(FunctionRef::new("print")).type_name(), "function");
        assert_eq!(Value::from(Table::new()).type_name(), "table");
    }

    #[test]
    fn numbers_display_like_the_host() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(-3.0).to_string(), "-3");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Value::from(1e20).to_string(), "1e20");
        assert_eq!(Value::from(-2.5e18).to_string(), "-2.5e18");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(0.25).to_string(), "0.25");
        assert_eq!(Value::from(0).to_string(), "0");
    }

    #[test]
    fn functions_and_tables_display_their_kind() {
        assert_eq!(Value::from(FunctionRef::new("on_load")).to_string(), "function: on_load");
        let t = Table::sequence([1, 2]).with("k", true);
        assert_eq!(Value::from(t).to_string(), "table: 3 entries");
    }

    #[test]
    fn json_arrays_become_one_based_sequences() {
        let v = Value::from(json!(["a", null, "c"]));
        let t = v.as_table().unwrap();
        assert_eq!(t.get(&Key::Int(1)), Some(&Value::from("a")));
        assert_eq!(t.get(&Key::Int(2)), None);
        assert_eq!(t.get(&Key::Int(3)), Some(&Value::from("c")));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn json_objects_keep_document_order_and_drop_nulls() {
        let v = Value::from(json!({ "z": 1, "a": null, "m": true }));
        let keys: Vec<_> = v.as_table().unwrap().iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Key::from("z"), Key::from("m")]);
    }
}
