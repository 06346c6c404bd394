//! Runtime type specifications and validation.
//!
//! Build a [`TypeSpec`] as ordinary data, check a [`Value`] against it, and
//! get back diagnostics that name the exact sub-value and sub-type that
//! failed:
//!
//! ```
//! use typespec_check::{check_value, CheckOptions, Table, TypeSpec, Value};
//!
//! let spec = TypeSpec::struct_of([
//!     ("name", TypeSpec::string()),
//!     ("age", TypeSpec::optional(TypeSpec::number())),
//! ]);
//! let value = Value::from(Table::new().with("name", 5));
//! let options = CheckOptions::new().with_name("user");
//!
//! assert_eq!(
//!     check_value(&value, &spec, &options),
//!     vec!["Unexpected value in user.name. Found: 5 Expected: value of type string"],
//! );
//! ```
pub mod error;
pub mod matcher;
pub mod render;
pub mod spec;
pub mod value;

pub use error::AssertError;
pub use matcher::{
    CheckOptions, Checker, PathSegment, TypeError, assert_value, check_value, get_type_errors,
    matches, value_is_type_no_table,
};
pub use render::{repr, type_error_to_string, type_to_description, where_to_description};
pub use spec::{Primitive, TypeSpec};
pub use value::{FunctionRef, Key, Table, Value};
