//! GraphQL query document generation.
//!
//! Produces one operation for the endpoint followed by one fragment per
//! array-of-record field:
//!
//! ```text
//! query getitem(
//!   $id: String!
//! ) {
//!   getitem(
//!     id: $id
//!   ) {
//!     id
//!     tags {
//!       ...tagsData
//!     }
//!   }
//! }
//!
//! fragment tagsData on ResGetItemtagsItem {
//!   label
//! }
//! ```

use api2gql_define::{ApiDescriptor, ArrayElement, FieldValue, Parameter, Shape};
use tracing::debug;

use crate::document::{Document, Node, comma_separated};
use crate::naming::{fragment_name, operation_name, response_type};
use crate::options::GeneratorOptions;
use crate::walker::{FragmentDescriptor, find_array_objects};

/// Generates the query document text for `api`.
///
/// ## Examples
///
/// ```
/// use api2gql_define::ApiDescriptor;
/// use api2gql_gen::codegen::generate_query;
/// use api2gql_gen::options::GeneratorOptions;
///
/// let api = ApiDescriptor::from_json(r#"{
///     "API_NAME": "GetItem",
///     "METHOD": "GET",
///     "PARAMETERS": ["id (string, required)"],
///     "RESPONSE": { "id": "string", "tags": [{ "label": "string" }] }
/// }"#).unwrap();
///
/// let query = generate_query(&api, &GeneratorOptions::default());
/// assert!(query.contains("$id: String!"));
/// assert!(query.contains("fragment tagsData on ResGetItemtagsItem {"));
/// ```
pub fn generate_query(api: &ApiDescriptor, options: &GeneratorOptions) -> String {
    query_document(api, options).render(&options.indent)
}

/// Builds the query document tree for `api`.
pub fn query_document(api: &ApiDescriptor, options: &GeneratorOptions) -> Document {
    let op_name = operation_name(&api.name);
    let keyword = options.operation_kind(api);
    let fragments = find_array_objects(&api.response, &response_type(&api.name));

    debug!(
        api = %api.name,
        operation = %keyword,
        parameters = api.parameters.len(),
        fragments = fragments.len(),
        "building query document"
    );

    let mut doc = Document::new();
    doc.push_section(operation_nodes(
        &format!("{keyword} {op_name}"),
        &op_name,
        &api.parameters,
        response_field_nodes(&api.response),
    ));
    for fragment in &fragments {
        doc.push_section(vec![fragment_node(fragment)]);
    }
    doc
}

/// `$name: Type`, with `!` for required parameters.
pub fn variable_declaration(param: &Parameter) -> String {
    let bang = if param.required { "!" } else { "" };
    format!("${}: {}{}", param.name, param.kind.graphql_type(), bang)
}

/// `name: $name`.
pub fn argument_binding(param: &Parameter) -> String {
    format!("{name}: ${name}", name = param.name)
}

fn operation_nodes(
    header: &str,
    field: &str,
    parameters: &[Parameter],
    selection: Vec<Node>,
) -> Vec<Node> {
    if parameters.is_empty() {
        return vec![Node::block(header, vec![Node::block(field, selection)])];
    }

    let variables = comma_separated(parameters.iter().map(variable_declaration));
    let arguments = comma_separated(parameters.iter().map(argument_binding));

    vec![
        Node::line(format!("{header}(")),
        Node::indent(variables),
        Node::block(
            ")",
            vec![
                Node::line(format!("{field}(")),
                Node::indent(arguments),
                Node::block(")", selection),
            ],
        ),
    ]
}

fn spread_node(field: &str) -> Node {
    Node::block(field, vec![Node::line(format!("...{}", fragment_name(field)))])
}

/// Renders a selection set recursively; arrays of records become spreads.
fn response_field_nodes(shape: &Shape) -> Vec<Node> {
    shape
        .iter()
        .map(|field| match &field.value {
            FieldValue::Record(nested) => Node::block(&field.name, response_field_nodes(nested)),
            FieldValue::ArrayOf(ArrayElement::Record(_)) => spread_node(&field.name),
            FieldValue::Primitive(_) | FieldValue::ArrayOf(ArrayElement::Primitive(_)) => {
                Node::line(&field.name)
            }
        })
        .collect()
}

/// Renders one fragment definition.
///
/// Nested records inside a fragment list only their immediate child names.
fn fragment_node(fragment: &FragmentDescriptor<'_>) -> Node {
    let body = fragment
        .fields
        .iter()
        .map(|field| match &field.value {
            FieldValue::Record(nested) => Node::block(
                &field.name,
                nested.iter().map(|child| Node::line(&child.name)).collect(),
            ),
            FieldValue::ArrayOf(ArrayElement::Record(_)) => spread_node(&field.name),
            FieldValue::Primitive(_) | FieldValue::ArrayOf(ArrayElement::Primitive(_)) => {
                Node::line(&field.name)
            }
        })
        .collect();

    Node::block(
        format!(
            "fragment {} on {}",
            fragment_name(fragment.name),
            fragment.type_name
        ),
        body,
    )
}
