use std::fmt;
use ordered_float::OrderedFloat;

use super::Value;

/// A table key. Numeric keys with an integral value are always stored as
/// `Int`, so `2.0` and `2` address the same slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    Bool(bool),
}

impl Key {
    pub fn number(n: f64) -> Self {
        if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 {
            Key::Int(n as i64)
        } else {
            Key::Float(OrderedFloat(n))
        }
    }

    /// The key as a checkable value (key side of a keyed-table entry).
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::Number(*i as f64),
            Key::Float(f) => Value::Number(f.0),
            Key::Str(s) => Value::String(s.clone()),
            Key::Bool(b) => Value::Boolean(*b),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Float(x) => f.write_str(&super::format_number(x.0)),
            Key::Str(s) => f.write_str(s),
            Key::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}
impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}
impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}
impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i as i64)
    }
}
impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}
impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Key::number(n)
    }
}
impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}
