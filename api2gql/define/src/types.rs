//! Core descriptor types.
//!
//! - [`ApiDescriptor`] - One REST endpoint: name, method, parameters, response shape
//! - [`RestMethod`] - Standard HTTP methods, recognized when the method string matches one
//! - [`RawApiDescriptor`] - The serde view of the JSON document before normalization

use serde::Deserialize;
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString};

use crate::error::DescriptorError;
use crate::parameter::Parameter;
use crate::shape::Shape;

/// HTTP methods.
///
/// The descriptor keeps its method as an opaque string; this enum is only
/// consulted when a generator needs to reason about the verb.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use api2gql_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("get").unwrap(), RestMethod::Get);
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

impl RestMethod {
    /// True for methods that only read (GET and HEAD).
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }
}

/// The JSON document as written by hand, before parameters are parsed and the
/// response is normalized.
///
/// Keys follow the upper-case convention (`API_NAME`, `METHOD`, `PARAMETERS`,
/// `RESPONSE`); lower-case aliases are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawApiDescriptor {
    /// Endpoint name (e.g. `DescribeLocalVolumes`).
    #[serde(rename = "API_NAME", alias = "name")]
    pub name: String,
    /// HTTP verb, passed through verbatim.
    #[serde(rename = "METHOD", alias = "method")]
    pub method: String,
    /// Encoded parameters, e.g. `"Marker (number, optional)"`.
    #[serde(rename = "PARAMETERS", alias = "parameters", default)]
    pub parameters: Vec<String>,
    /// Response shape.
    #[serde(rename = "RESPONSE", alias = "response")]
    pub response: Map<String, Value>,
}

/// A normalized endpoint description, ready for generation.
///
/// ## Examples
///
/// ```
/// use api2gql_define::ApiDescriptor;
///
/// let api = ApiDescriptor::from_json(r#"{
///     "API_NAME": "GetItem",
///     "METHOD": "GET",
///     "PARAMETERS": ["id (string, required)"],
///     "RESPONSE": { "id": "string", "tags": [{ "label": "string" }] }
/// }"#).unwrap();
///
/// assert_eq!(api.name, "GetItem");
/// assert!(api.parameters[0].required);
/// assert_eq!(api.response.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescriptor {
    /// Endpoint name, used for type, class and operation names.
    pub name: String,
    /// HTTP verb, opaque to the generators.
    pub method: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Response shape.
    pub response: Shape,
}

impl ApiDescriptor {
    /// Parses and normalizes a JSON descriptor document.
    ///
    /// ## Errors
    ///
    /// Returns [`DescriptorError::Json`] for invalid JSON, and any error from
    /// [`ApiDescriptor::try_from`] for invalid content.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        let raw: RawApiDescriptor = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Like [`ApiDescriptor::from_json`], starting from an already-parsed value.
    pub fn from_value(value: Value) -> Result<Self, DescriptorError> {
        let raw: RawApiDescriptor = serde_json::from_value(value)?;
        Self::try_from(raw)
    }

    /// The method as a [`RestMethod`], if it is a standard verb.
    pub fn rest_method(&self) -> Option<RestMethod> {
        self.method.trim().parse().ok()
    }
}

impl TryFrom<RawApiDescriptor> for ApiDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawApiDescriptor) -> Result<Self, Self::Error> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let parameters = raw
            .parameters
            .iter()
            .map(|param| param.parse())
            .collect::<Result<Vec<Parameter>, _>>()?;

        let response = Shape::from_json(&raw.response)?;

        Ok(Self {
            name,
            method: raw.method,
            parameters,
            response,
        })
    }
}
