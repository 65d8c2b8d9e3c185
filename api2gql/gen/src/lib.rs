//! GraphQL and TypeScript generator for REST endpoint descriptors.
//!
//! This crate turns an [`ApiDescriptor`](api2gql_define::ApiDescriptor) from
//! `api2gql-define` into three text artifacts:
//!
//! - A GraphQL query document, with one fragment per array-of-record field
//! - TypeScript `type-graphql` classes for the parameters and the response
//! - A resolver class that forwards the call to a `requestAPI` helper
//!
//! ## Modules
//!
//! - [`codegen`] - The three generators
//! - [`document`] - Indented document tree shared by the generators
//! - [`naming`] - Every derived identifier (types, fragments, operations)
//! - [`walker`] - Response shape traversals
//! - [`validation`] - Naming collision checks
//! - [`options`] - Generator settings
//! - [`output`] - Orchestration and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use api2gql_define::ApiDescriptor;
//! use api2gql_gen::options::GeneratorOptions;
//! use api2gql_gen::output::generate_and_write;
//!
//! let json = std::fs::read_to_string("describe_volumes.json").unwrap();
//! let api = ApiDescriptor::from_json(&json).unwrap();
//!
//! // dry_run=true prints the artifacts instead of writing them
//! generate_and_write(&api, Path::new("out"), "describe_volumes", &GeneratorOptions::default(), true)
//!     .unwrap();
//! ```
//!
//! ## Generated Names
//!
//! For an endpoint named `GetItem` with a `tags` array of records:
//!
//! ```text
//! query getitem(...)                      # operation, lower-cased
//! fragment tagsData on ResGetItemtagsItem # fragment per array of records
//! class GetItemParams                     # @ArgsType()
//! class ResGetItemtagsItem                # @ObjectType(), array element
//! class ResGetItem                        # @ObjectType(), root response
//! class GetItemResolver                   # @Resolver()
//! ```

pub mod codegen;
pub mod document;
pub mod errors;
pub mod naming;
pub mod options;
pub mod output;
pub mod validation;
pub mod walker;

#[cfg(test)]
mod test_utils;
