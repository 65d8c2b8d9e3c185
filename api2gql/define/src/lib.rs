//! api2gql Definition Library
//!
//! This crate provides the input model for `api2gql-gen`: a declarative
//! description of one REST endpoint (name, method, parameters, response
//! shape) that the generator turns into a GraphQL query, TypeScript type
//! declarations and a resolver wrapper.
//!
//! ## Core Types
//!
//! - [`ApiDescriptor`] - A normalized endpoint description
//! - [`RawApiDescriptor`] - The serde view of the JSON document
//! - [`Parameter`] - A parsed `"<name> (<type>, <flag>)"` parameter
//! - [`Primitive`] - Leaf value types, with [`map_primitive_type`] for tags
//! - [`Shape`], [`Field`], [`FieldValue`], [`ArrayElement`] - The response tree
//! - [`RestMethod`] - Standard HTTP methods
//! - [`DescriptorError`] - Parse and normalization failures
//!
//! ## Examples
//!
//! ```
//! use api2gql_define::{ApiDescriptor, FieldValue};
//!
//! let api = ApiDescriptor::from_json(r#"{
//!     "API_NAME": "DescribeLocalVolumes",
//!     "METHOD": "GET",
//!     "PARAMETERS": ["Action (string, required)", "Marker (number, optional)"],
//!     "RESPONSE": {
//!         "RequestId": "string",
//!         "DBList": [{ "DBname": "string", "DBstatus": "string" }]
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(api.parameters.len(), 2);
//! assert!(matches!(api.response.get("DBList"), Some(FieldValue::ArrayOf(_))));
//! ```

pub mod error;
pub mod parameter;
pub mod prelude;
pub mod primitive;
pub mod shape;
pub mod types;

// Re-export main types at crate root
pub use error::DescriptorError;
pub use parameter::Parameter;
pub use primitive::{Primitive, map_primitive_type};
pub use shape::{ArrayElement, Field, FieldValue, Shape};
pub use types::{ApiDescriptor, RawApiDescriptor, RestMethod};
