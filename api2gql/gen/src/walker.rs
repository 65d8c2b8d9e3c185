//! Response shape traversal.
//!
//! Two depth-first walks over a normalized [`Shape`]:
//!
//! - [`find_array_objects`] collects every array-of-record field, which the
//!   query generator turns into a fragment.
//! - [`collect_record_types`] collects every record shape that needs its own
//!   type declaration, children first.
//!
//! Both derive type names through [`crate::naming`], so a fragment's `on`
//! type and the declared class for the same element always match.

use api2gql_define::{ArrayElement, FieldValue, Shape};

use crate::naming::{array_item_type, nested_record_type};

/// An array-of-record field that gets a reusable fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDescriptor<'a> {
    /// Field name holding the array.
    pub name: &'a str,
    /// Enclosing field name, empty at the response root.
    pub parent: &'a str,
    /// Dotted field path from the response root (for diagnostics).
    pub path: String,
    /// Type name of the array element.
    pub type_name: String,
    /// Shape of the array element.
    pub fields: &'a Shape,
}

/// A record shape that gets its own type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType<'a> {
    /// Declared type name.
    pub type_name: String,
    /// Dotted field path from the response root, empty for the root itself.
    pub path: String,
    /// The record's fields.
    pub shape: &'a Shape,
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Finds every array-of-record field, in pre-order.
///
/// Nested records are searched with their field name as the new enclosing
/// name. An array's element shape is searched too, so arrays inside arrays
/// each get their own descriptor.
///
/// ## Examples
///
/// ```
/// use api2gql_define::{ArrayElement, FieldValue, Primitive, Shape};
/// use api2gql_gen::walker::find_array_objects;
///
/// let element = Shape::new().with_field("label", FieldValue::Primitive(Primitive::String));
/// let shape = Shape::new()
///     .with_field("id", FieldValue::Primitive(Primitive::String))
///     .with_field("tags", FieldValue::ArrayOf(ArrayElement::Record(element)));
///
/// let found = find_array_objects(&shape, "ResGetItem");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "tags");
/// assert_eq!(found[0].parent, "");
/// assert_eq!(found[0].type_name, "ResGetItemtagsItem");
/// ```
pub fn find_array_objects<'a>(shape: &'a Shape, root_type: &str) -> Vec<FragmentDescriptor<'a>> {
    let mut found = Vec::new();
    walk_array_objects(shape, "", "", root_type, &mut found);
    found
}

fn walk_array_objects<'a>(
    shape: &'a Shape,
    enclosing: &'a str,
    path: &str,
    type_name: &str,
    found: &mut Vec<FragmentDescriptor<'a>>,
) {
    for field in shape {
        let field_path = join_path(path, &field.name);
        match &field.value {
            FieldValue::Record(nested) => {
                let nested_type = nested_record_type(type_name, &field.name);
                walk_array_objects(nested, &field.name, &field_path, &nested_type, found);
            }
            FieldValue::ArrayOf(ArrayElement::Record(element)) => {
                let item_type = array_item_type(type_name, &field.name);
                found.push(FragmentDescriptor {
                    name: &field.name,
                    parent: enclosing,
                    path: field_path.clone(),
                    type_name: item_type.clone(),
                    fields: element,
                });
                walk_array_objects(element, &field.name, &field_path, &item_type, found);
            }
            FieldValue::Primitive(_) | FieldValue::ArrayOf(ArrayElement::Primitive(_)) => {}
        }
    }
}

/// Lists every record type in declaration order: each type's dependencies
/// come before it, and the root type is last.
///
/// ## Examples
///
/// ```
/// use api2gql_define::{FieldValue, Primitive, Shape};
/// use api2gql_gen::walker::collect_record_types;
///
/// let user = Shape::new().with_field("age", FieldValue::Primitive(Primitive::Number));
/// let shape = Shape::new().with_field("UserInfo", FieldValue::Record(user));
///
/// let names: Vec<_> = collect_record_types(&shape, "ResGetUser")
///     .into_iter()
///     .map(|record| record.type_name)
///     .collect();
/// assert_eq!(names, vec!["ResGetUserUserInfo", "ResGetUser"]);
/// ```
pub fn collect_record_types<'a>(shape: &'a Shape, root_type: &str) -> Vec<RecordType<'a>> {
    let mut records = Vec::new();
    walk_record_types(shape, "", root_type, &mut records);
    records
}

fn walk_record_types<'a>(
    shape: &'a Shape,
    path: &str,
    type_name: &str,
    records: &mut Vec<RecordType<'a>>,
) {
    for field in shape {
        let field_path = join_path(path, &field.name);
        match &field.value {
            FieldValue::Record(nested) => {
                let nested_type = nested_record_type(type_name, &field.name);
                walk_record_types(nested, &field_path, &nested_type, records);
            }
            FieldValue::ArrayOf(ArrayElement::Record(element)) => {
                let item_type = array_item_type(type_name, &field.name);
                walk_record_types(element, &field_path, &item_type, records);
            }
            FieldValue::Primitive(_) | FieldValue::ArrayOf(ArrayElement::Primitive(_)) => {}
        }
    }

    records.push(RecordType {
        type_name: type_name.to_string(),
        path: path.to_string(),
        shape,
    });
}
