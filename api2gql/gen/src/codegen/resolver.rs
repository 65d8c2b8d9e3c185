//! Resolver wrapper generation.
//!
//! The resolver binds the endpoint's parameter names and forwards them to an
//! external `requestAPI(ctx, apiName, method, args)` helper, returning the
//! `data` field of its result.

use api2gql_define::ApiDescriptor;

use crate::document::{Document, Node};
use crate::naming::{operation_name, params_type, resolver_type, response_type};
use crate::options::GeneratorOptions;

/// Generates the resolver text for `api`.
///
/// ## Examples
///
/// ```
/// use api2gql_define::ApiDescriptor;
/// use api2gql_gen::codegen::generate_resolver;
/// use api2gql_gen::options::GeneratorOptions;
///
/// let api = ApiDescriptor::from_json(r#"{
///     "API_NAME": "GetItem",
///     "METHOD": "GET",
///     "PARAMETERS": ["id (string, required)", "lang (string, optional)"],
///     "RESPONSE": { "id": "string" }
/// }"#).unwrap();
///
/// let resolver = generate_resolver(&api, &GeneratorOptions::default());
/// assert!(resolver.contains("requestAPI(ctx, 'GetItem', 'GET', { id, lang })"));
/// ```
pub fn generate_resolver(api: &ApiDescriptor, options: &GeneratorOptions) -> String {
    resolver_document(api, options).render(&options.indent)
}

/// Builds the resolver document tree for `api`.
pub fn resolver_document(api: &ApiDescriptor, options: &GeneratorOptions) -> Document {
    let response = response_type(&api.name);
    let params = params_type(&api.name);
    let decorator = options.operation_kind(api).decorator();
    let args = args_object(api);

    let method_body = vec![
        Node::line(format!(
            "const res = await requestAPI(ctx, {}, {}, {args});",
            js_string(&api.name),
            js_string(&api.method),
        )),
        Node::line("return res.data;"),
    ];

    let class_body = vec![
        Node::line(format!("@{decorator}((returns) => {response})")),
        Node::line(format!("async {}(", operation_name(&api.name))),
        Node::indent(vec![
            Node::line("@Ctx() ctx: Context,"),
            Node::line(format!("@Args() {args}: {params}")),
        ]),
        Node::block(format!("): Promise<{response} | undefined>"), method_body),
    ];

    Document::from(vec![
        Node::line(format!("@Resolver((of) => {response})")),
        Node::block(
            format!("export class {}", resolver_type(&api.name)),
            class_body,
        ),
    ])
}

/// Import lines for a standalone `resolvers.ts` file.
pub fn resolver_imports(api: &ApiDescriptor, options: &GeneratorOptions) -> Vec<Node> {
    let decorator = options.operation_kind(api).decorator();
    vec![
        Node::line(format!(
            "import {{ {decorator}, Ctx, Args, Resolver }} from 'type-graphql';"
        )),
        Node::line(format!(
            "import {{ {}, {} }} from './typeDefs';",
            params_type(&api.name),
            response_type(&api.name)
        )),
        Node::line(format!(
            "import {{ requestAPI }} from {};",
            js_string(&options.request_module)
        )),
        Node::line(format!(
            "import {{ Context }} from {};",
            js_string(&options.context_module)
        )),
    ]
}

/// `{ a, b }` shorthand object of parameter names, or `{}`.
fn args_object(api: &ApiDescriptor) -> String {
    if api.parameters.is_empty() {
        return "{}".to_string();
    }
    let names: Vec<&str> = api.parameters.iter().map(|p| p.name.as_str()).collect();
    format!("{{ {} }}", names.join(", "))
}

/// Single-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
