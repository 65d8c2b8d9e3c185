//! Error types for the api2gql generator.

use api2gql_define::DescriptorError;
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The descriptor could not be parsed or normalized
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Failed to read the descriptor file
    #[error("Failed to read input file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Two generated identifiers resolve to the same name.
    ///
    /// Fragment names are derived from the field name alone, and type names
    /// concatenate field names along the path, so distinct fields can end up
    /// with the same identifier (e.g. `a.bc` and `ab.c`).
    #[error(
        "Naming collision: {kind} '{name}' is generated for both '{first}' and '{second}'. Suggestion: rename one of the fields"
    )]
    NamingCollision {
        /// What collided ("fragment" or "type").
        kind: &'static str,
        /// The duplicated identifier.
        name: String,
        /// Field path of the first occurrence.
        first: String,
        /// Field path of the second occurrence.
        second: String,
    },
}
