//! Error types for descriptor parsing and shape normalization.

use thiserror::Error;

/// Errors raised while turning a raw endpoint document into an
/// [`ApiDescriptor`](crate::ApiDescriptor).
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// A parameter string does not follow `"<name> (<type>, <flag>)"`.
    #[error("Malformed parameter '{input}': {reason}")]
    MalformedParameter {
        /// The parameter string as written in the descriptor.
        input: String,
        /// What is missing or wrong.
        reason: String,
    },

    /// An array field has no elements, so its element type cannot be inferred.
    #[error(
        "Array field '{path}' is empty: the element type is inferred from the first element, so at least one example element is required"
    )]
    EmptyArray {
        /// Dotted path to the offending field (e.g. `InstanceList[0].Tags`).
        path: String,
    },

    /// A value that has no counterpart in the shape model.
    #[error("Unsupported value at '{path}': {kind}")]
    UnsupportedValue {
        /// Dotted path to the offending field.
        path: String,
        /// Short description of the value (e.g. "null", "nested array").
        kind: &'static str,
    },

    /// The descriptor has an empty `API_NAME`.
    #[error("API name must not be empty")]
    EmptyName,

    /// The descriptor document is not valid JSON or misses required keys.
    #[error("Failed to parse API descriptor: {0}")]
    Json(#[from] serde_json::Error),
}
