//! Primitive field types and the tag-to-type mapping.
//!
//! Response shapes and parameters describe leaf values with a short tag
//! (`"string"`, `"number"`, `"boolean"`). [`map_primitive_type`] resolves a tag
//! into a [`Primitive`], which knows its GraphQL and TypeScript spellings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// A leaf value type.
///
/// ## Examples
///
/// ```
/// use api2gql_define::Primitive;
///
/// assert_eq!(Primitive::Number.graphql_type(), "Float");
/// assert_eq!(Primitive::Number.typescript_type(), "number");
/// assert_eq!(Primitive::Boolean.to_string(), "boolean");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Primitive {
    /// Text (`String` / `string`)
    String,
    /// Any JSON number (`Float` / `number`)
    Number,
    /// `Boolean` / `boolean`
    Boolean,
}

impl Primitive {
    /// Resolves a type tag, falling back to [`Primitive::String`] for anything
    /// unrecognized. Comparison is trimmed and case-insensitive.
    pub fn from_tag(tag: &str) -> Self {
        tag.trim().parse().unwrap_or(Self::String)
    }

    /// Infers the type of an example literal (as found in primitive arrays).
    ///
    /// Returns `None` for values that are not scalars.
    pub fn from_literal(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(Self::String),
            Value::Number(_) => Some(Self::Number),
            Value::Bool(_) => Some(Self::Boolean),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// GraphQL scalar name.
    pub fn graphql_type(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Float",
            Self::Boolean => "Boolean",
        }
    }

    /// TypeScript type name.
    pub fn typescript_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Maps a primitive type tag to its [`Primitive`].
///
/// Unknown or malformed tags silently map to [`Primitive::String`]; this is
/// never an error.
///
/// ## Examples
///
/// ```
/// use api2gql_define::{map_primitive_type, Primitive};
///
/// assert_eq!(map_primitive_type("NUMBER"), Primitive::Number);
/// assert_eq!(map_primitive_type("int64"), Primitive::String);
/// ```
pub fn map_primitive_type(tag: &str) -> Primitive {
    Primitive::from_tag(tag)
}
