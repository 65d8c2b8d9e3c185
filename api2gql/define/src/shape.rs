//! Response shape model and JSON normalization.
//!
//! A response shape arrives as loosely typed JSON: tag strings for leaves,
//! objects for nested records, and example arrays whose first element decides
//! the element type. [`Shape::from_json`] normalizes that document once into a
//! closed tree of [`FieldValue`]s so the generators only ever pattern-match.
//!
//! ```text
//! {                                   Shape
//!   "RequestId": "string",            ├─ RequestId: Primitive(String)
//!   "UserInfo": { "age": "number" },  ├─ UserInfo: Record(age: Primitive(Number))
//!   "Scores": [1, 2],                 ├─ Scores: ArrayOf(Primitive(Number))
//!   "DBList": [{ "DBname": "string" }]└─ DBList: ArrayOf(Record(DBname: ...))
//! }
//! ```

use serde_json::{Map, Value};

use crate::error::DescriptorError;
use crate::primitive::Primitive;

/// An ordered set of named fields describing one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    fields: Vec<Field>,
}

/// A single named field within a [`Shape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, unique within its shape.
    pub name: String,
    /// The field's value kind.
    pub value: FieldValue,
}

/// What a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A leaf value.
    Primitive(Primitive),
    /// A nested record.
    Record(Shape),
    /// A list, typed by its first element.
    ArrayOf(ArrayElement),
}

/// Element type of an [`FieldValue::ArrayOf`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayElement {
    /// List of scalars (inferred from an example literal).
    Primitive(Primitive),
    /// List of records.
    Record(Shape),
}

impl Shape {
    /// Creates an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    ///
    /// ## Examples
    ///
    /// ```
    /// use api2gql_define::{FieldValue, Primitive, Shape};
    ///
    /// let shape = Shape::new()
    ///     .with_field("id", FieldValue::Primitive(Primitive::String))
    ///     .with_field("count", FieldValue::Primitive(Primitive::Number));
    /// assert_eq!(shape.len(), 2);
    /// ```
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
        self
    }

    /// Normalizes a JSON object into a shape.
    ///
    /// ## Errors
    ///
    /// - [`DescriptorError::EmptyArray`] for an array with no example element
    /// - [`DescriptorError::UnsupportedValue`] for `null` or nested arrays
    ///
    /// ## Examples
    ///
    /// ```
    /// use api2gql_define::{FieldValue, Primitive, Shape};
    /// use serde_json::json;
    ///
    /// let value = json!({ "id": "string", "tags": ["a"] });
    /// let shape = Shape::from_json(value.as_object().unwrap()).unwrap();
    /// assert_eq!(shape.get("id"), Some(&FieldValue::Primitive(Primitive::String)));
    /// ```
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, DescriptorError> {
        normalize_object(object, "")
    }

    /// Iterates fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Looks up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Number of fields at this level.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the shape has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FieldValue {
    /// Returns the element shape if this is a list of records.
    pub fn as_record_array(&self) -> Option<&Shape> {
        match self {
            Self::ArrayOf(ArrayElement::Record(shape)) => Some(shape),
            _ => None,
        }
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn normalize_object(object: &Map<String, Value>, path: &str) -> Result<Shape, DescriptorError> {
    let mut shape = Shape::new();
    for (key, value) in object {
        let field_path = child_path(path, key);
        let normalized = normalize_value(value, &field_path)?;
        shape = shape.with_field(key.clone(), normalized);
    }
    Ok(shape)
}

fn normalize_value(value: &Value, path: &str) -> Result<FieldValue, DescriptorError> {
    match value {
        Value::String(tag) => Ok(FieldValue::Primitive(Primitive::from_tag(tag))),
        // Literal leaves are accepted for convenience.
        Value::Number(_) => Ok(FieldValue::Primitive(Primitive::Number)),
        Value::Bool(_) => Ok(FieldValue::Primitive(Primitive::Boolean)),
        Value::Object(object) => Ok(FieldValue::Record(normalize_object(object, path)?)),
        Value::Array(items) => normalize_array(items, path).map(FieldValue::ArrayOf),
        Value::Null => Err(DescriptorError::UnsupportedValue {
            path: path.to_string(),
            kind: "null",
        }),
    }
}

fn normalize_array(items: &[Value], path: &str) -> Result<ArrayElement, DescriptorError> {
    // Only the first element is inspected.
    let first = items.first().ok_or_else(|| DescriptorError::EmptyArray {
        path: path.to_string(),
    })?;

    let element_path = format!("{path}[0]");
    match first {
        Value::Object(object) => Ok(ArrayElement::Record(normalize_object(object, &element_path)?)),
        Value::Array(_) => Err(DescriptorError::UnsupportedValue {
            path: element_path,
            kind: "nested array",
        }),
        other => Primitive::from_literal(other)
            .map(ArrayElement::Primitive)
            .ok_or(DescriptorError::UnsupportedValue {
                path: element_path,
                kind: "null array element",
            }),
    }
}
