//! Code generation modules for api2gql.
//!
//! Each submodule turns an [`ApiDescriptor`](api2gql_define::ApiDescriptor)
//! into one artifact:
//!
//! - [`query`] - The GraphQL operation plus fragments for arrays of records
//! - [`type_defs`] - `type-graphql` argument and object classes
//! - [`resolver`] - The resolver wrapper that calls `requestAPI`
//!
//! ## Output Format
//!
//! Every generator builds a [`Document`](crate::document::Document) and
//! renders it with the configured indentation, so all artifacts share one
//! set of layout rules. See [`crate::output`] for assembly and file writing.

pub mod query;
pub mod resolver;
pub mod type_defs;

pub use query::{generate_query, query_document};
pub use resolver::{generate_resolver, resolver_document, resolver_imports};
pub use type_defs::{TYPE_DEFS_IMPORTS, generate_type_defs, type_defs_document};
