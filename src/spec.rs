//! Type specifications as plain data.
//!
//! A [`TypeSpec`] is built once (usually through the constructors below) and
//! then only read. It owns no reference to the values it checks, so one spec
//! can be shared across any number of checks and threads.
use indexmap::IndexMap;

use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Function,
    Table,
    Nil,
    Any,     // accepts everything
    Never,   // accepts nothing
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Function => "function",
            Primitive::Table => "table",
            Primitive::Nil => "nil",
            Primitive::Any => "any",
            Primitive::Never => "never",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeSpec {
    Primitive(Primitive),
    Literal(Value),                  // equal to exactly this value
    Optional(Box<TypeSpec>),         // nil, or the inner spec
    Union(Vec<TypeSpec>),            // ordered; first full match wins
    KeyedTable {
        key: Box<TypeSpec>,
        value: Box<TypeSpec>,
    },
    Struct(IndexMap<String, TypeSpec>), // declared fields only; extras allowed
    Array(Box<TypeSpec>),            // contiguous run from index 1
}

impl From<Primitive> for TypeSpec {
    fn from(p: Primitive) -> Self {
        TypeSpec::Primitive(p)
    }
}

// ------------------------------- Builders -------------------------------- //

impl TypeSpec {
    pub fn string() -> Self {
        Primitive::String.into()
    }
    pub fn number() -> Self {
        Primitive::Number.into()
    }
    pub fn boolean() -> Self {
        Primitive::Boolean.into()
    }
    pub fn function() -> Self {
        Primitive::Function.into()
    }
    pub fn table() -> Self {
        Primitive::Table.into()
    }
    pub fn nil() -> Self {
        Primitive::Nil.into()
    }
    pub fn any() -> Self {
        Primitive::Any.into()
    }
    pub fn never() -> Self {
        Primitive::Never.into()
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        TypeSpec::Literal(value.into())
    }

    /// Wrapping an already optional spec returns it unchanged.
    pub fn optional(inner: TypeSpec) -> Self {
        match inner {
            TypeSpec::Optional(_) => inner,
            other => TypeSpec::Optional(Box::new(other)),
        }
    }

    pub fn union(options: impl IntoIterator<Item = TypeSpec>) -> Self {
        TypeSpec::Union(options.into_iter().collect())
    }

    pub fn literal_union<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::union(values.into_iter().map(Self::literal))
    }

    /// Copy of `existing` with more literal options appended. A spec that
    /// is not a union is taken as a union of one.
    pub fn extend_literal_union<I>(existing: &TypeSpec, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut options = match existing {
            TypeSpec::Union(options) => options.clone(),
            other => vec![other.clone()],
        };
        options.extend(values.into_iter().map(Self::literal));
        TypeSpec::Union(options)
    }

    pub fn struct_of<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeSpec)>,
        K: Into<String>,
    {
        TypeSpec::Struct(fields.into_iter().map(|(k, t)| (k.into(), t)).collect())
    }

    /// Copy of `existing`'s fields merged with `fields`; on a name clash the
    /// new entry wins (and keeps the original field's position).
    pub fn extend_struct<I, K>(existing: &TypeSpec, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeSpec)>,
        K: Into<String>,
    {
        let mut merged = match existing {
            TypeSpec::Struct(existing) => existing.clone(),
            _ => IndexMap::new(),
        };
        for (name, ty) in fields {
            merged.insert(name.into(), ty);
        }
        TypeSpec::Struct(merged)
    }

    /// `any`/`any` is just a table.
    pub fn keyed_table(key: TypeSpec, value: TypeSpec) -> Self {
        if key.is_any() && value.is_any() {
            return Self::table();
        }
        TypeSpec::KeyedTable { key: Box::new(key), value: Box::new(value) }
    }

    pub fn array(elem: TypeSpec) -> Self {
        TypeSpec::Array(Box::new(elem))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TypeSpec::Primitive(Primitive::Any))
    }
}
