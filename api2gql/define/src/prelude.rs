//! Convenient re-exports for working with endpoint descriptors.
//!
//! ## Examples
//!
//! ```
//! use api2gql_define::prelude::*;
//!
//! let api = ApiDescriptor {
//!     name: "GetItem".to_string(),
//!     method: "GET".to_string(),
//!     parameters: vec![Parameter::new("id", Primitive::String, true)],
//!     response: Shape::new().with_field("id", FieldValue::Primitive(Primitive::String)),
//! };
//! assert_eq!(api.rest_method(), Some(RestMethod::Get));
//! ```

pub use crate::error::DescriptorError;
pub use crate::parameter::Parameter;
pub use crate::primitive::{Primitive, map_primitive_type};
pub use crate::shape::{ArrayElement, Field, FieldValue, Shape};
pub use crate::types::{ApiDescriptor, RawApiDescriptor, RestMethod};
