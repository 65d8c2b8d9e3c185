//! Endpoint parameter encoding.
//!
//! Parameters are written as a single string, `"<name> (<type>, <flag>)"`:
//!
//! ```text
//! InstanceName (string, optional)
//! Marker (number, required)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::DescriptorError;
use crate::primitive::Primitive;

/// A parsed endpoint parameter.
///
/// ## Examples
///
/// ```
/// use api2gql_define::{Parameter, Primitive};
///
/// let param: Parameter = "MaxResults (number, optional)".parse().unwrap();
/// assert_eq!(param.name, "MaxResults");
/// assert_eq!(param.kind, Primitive::Number);
/// assert!(!param.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter name, used verbatim as the GraphQL variable and argument name.
    pub name: String,
    /// Mapped primitive type (unknown tags are `String`).
    pub kind: Primitive,
    /// Whether the flag was `required`.
    pub required: bool,
}

impl Parameter {
    /// Creates a parameter directly, bypassing the string encoding.
    pub fn new(name: impl Into<String>, kind: Primitive, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }
}

impl FromStr for Parameter {
    type Err = DescriptorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| DescriptorError::MalformedParameter {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (name, rest) = input
            .split_once('(')
            .ok_or_else(|| malformed("missing '(' before the parameter type"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed("missing parameter name before '('"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(malformed("parameter name must not contain whitespace"));
        }

        let (tag, flag) = rest
            .split_once(',')
            .ok_or_else(|| malformed("missing ',' between the type and the required/optional flag"))?;

        let flag = flag.trim();
        let flag = flag.strip_suffix(')').unwrap_or(flag).trim();

        Ok(Self {
            name: name.to_string(),
            kind: Primitive::from_tag(tag),
            required: flag.eq_ignore_ascii_case("required"),
        })
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.required { "required" } else { "optional" };
        write!(f, "{} ({}, {})", self.name, self.kind, flag)
    }
}
