//! TypeScript type declarations (`type-graphql` classes).
//!
//! Emits the arguments class first, then one `@ObjectType()` class per record
//! shape in dependency order, ending with the root response class. Type names
//! come from [`crate::naming`] via [`collect_record_types`].

use api2gql_define::{ApiDescriptor, ArrayElement, Field, FieldValue, Parameter};
use tracing::debug;

use crate::document::{Document, Node, separated};
use crate::naming::{array_item_type, nested_record_type, params_type, response_type};
use crate::options::GeneratorOptions;
use crate::walker::{RecordType, collect_record_types};

/// Import line for a standalone `typeDefs.ts` file.
pub const TYPE_DEFS_IMPORTS: &str =
    "import { Field, ObjectType, ArgsType, Float } from 'type-graphql';";

/// Generates the type declaration text for `api`.
///
/// ## Examples
///
/// ```
/// use api2gql_define::ApiDescriptor;
/// use api2gql_gen::codegen::generate_type_defs;
/// use api2gql_gen::options::GeneratorOptions;
///
/// let api = ApiDescriptor::from_json(r#"{
///     "API_NAME": "GetStats",
///     "METHOD": "GET",
///     "PARAMETERS": [],
///     "RESPONSE": { "scores": [1, 2, 3] }
/// }"#).unwrap();
///
/// let defs = generate_type_defs(&api, &GeneratorOptions::default());
/// assert!(defs.contains("scores?: number[];"));
/// ```
pub fn generate_type_defs(api: &ApiDescriptor, options: &GeneratorOptions) -> String {
    type_defs_document(api).render(&options.indent)
}

/// Builds the type declaration document tree for `api`.
pub fn type_defs_document(api: &ApiDescriptor) -> Document {
    let records = collect_record_types(&api.response, &response_type(&api.name));
    debug!(api = %api.name, types = records.len(), "building type declarations");

    let mut doc = Document::new();
    doc.push_section(params_class(&params_type(&api.name), &api.parameters));
    for record in &records {
        doc.push_section(object_class(record));
    }
    doc
}

fn params_class(class_name: &str, parameters: &[Parameter]) -> Vec<Node> {
    let fields = parameters.iter().map(|param| {
        let ts_type = param.kind.typescript_type();
        if param.required {
            vec![
                Node::line("@Field()"),
                Node::line(format!("{}!: {};", param.name, ts_type)),
            ]
        } else {
            vec![
                Node::line("@Field({ nullable: true })"),
                Node::line(format!("{}?: {};", param.name, ts_type)),
            ]
        }
    });

    vec![
        Node::line("@ArgsType()"),
        Node::block(format!("export class {class_name}"), separated(fields)),
    ]
}

fn object_class(record: &RecordType<'_>) -> Vec<Node> {
    let fields = record
        .shape
        .iter()
        .map(|field| object_field(&record.type_name, field));

    vec![
        Node::line("@ObjectType()"),
        Node::block(
            format!("export class {}", record.type_name),
            separated(fields),
        ),
    ]
}

/// Decorator and property lines for one response field. Every response
/// field is optional.
fn object_field(parent_type: &str, field: &Field) -> Vec<Node> {
    let name = &field.name;
    let (decorator, property) = match &field.value {
        FieldValue::Primitive(primitive) => (
            "@Field({ nullable: true })".to_string(),
            format!("{name}?: {};", primitive.typescript_type()),
        ),
        FieldValue::Record(_) => {
            let type_name = nested_record_type(parent_type, name);
            (
                format!("@Field(() => {type_name}, {{ nullable: true }})"),
                format!("{name}?: {type_name};"),
            )
        }
        FieldValue::ArrayOf(ArrayElement::Record(_)) => {
            let type_name = array_item_type(parent_type, name);
            (
                format!("@Field(() => [{type_name}], {{ nullable: true }})"),
                format!("{name}?: {type_name}[];"),
            )
        }
        FieldValue::ArrayOf(ArrayElement::Primitive(primitive)) => (
            format!(
                "@Field(() => [{}], {{ nullable: true }})",
                primitive.graphql_type()
            ),
            format!("{name}?: {}[];", primitive.typescript_type()),
        ),
    };

    vec![Node::line(decorator), Node::line(property)]
}
