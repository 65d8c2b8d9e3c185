//! Generator configuration.

use api2gql_define::ApiDescriptor;
use strum::Display;

use crate::errors::GeneratorError;

/// Default indentation unit for every artifact.
pub const DEFAULT_INDENT: &str = "  ";

/// Widest accepted indentation unit, in characters.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Default import path of the `requestAPI` helper used by generated resolvers.
pub const DEFAULT_REQUEST_MODULE: &str = "../../utils/request";

/// Default import path of the resolver `Context` type.
pub const DEFAULT_CONTEXT_MODULE: &str = "overlord-server";

/// GraphQL operation keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OperationKind {
    /// `query`, resolved with `@Query`
    Query,
    /// `mutation`, resolved with `@Mutation`
    Mutation,
}

impl OperationKind {
    /// The type-graphql decorator name for this operation.
    pub fn decorator(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

/// Settings shared by all generators.
///
/// ## Examples
///
/// ```
/// use api2gql_gen::options::GeneratorOptions;
///
/// let options = GeneratorOptions::default().with_indent_spaces(4);
/// assert_eq!(options.indent, "    ");
/// assert!(options.detect_collisions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Indentation unit used when rendering.
    pub indent: String,
    /// Derive `mutation` for methods other than GET/HEAD. When false every
    /// endpoint becomes a `query`.
    pub operation_from_method: bool,
    /// Fail on fragment or type name collisions instead of emitting them.
    pub detect_collisions: bool,
    /// Module the resolver imports `requestAPI` from.
    pub request_module: String,
    /// Module the resolver imports `Context` from.
    pub context_module: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            operation_from_method: false,
            detect_collisions: true,
            request_module: DEFAULT_REQUEST_MODULE.to_string(),
            context_module: DEFAULT_CONTEXT_MODULE.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Uses `spaces` spaces per indentation level.
    pub fn with_indent_spaces(mut self, spaces: usize) -> Self {
        self.indent = " ".repeat(spaces);
        self
    }

    /// Checks the options before any generation happens.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the indent is empty, wider than
    /// [`MAX_INDENT_WIDTH`] or contains anything other than spaces and tabs, or
    /// if an import module is empty.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.indent.is_empty() {
            return Err(GeneratorError::ConfigError(
                "indent must not be empty".to_string(),
            ));
        }
        if self.indent.len() > MAX_INDENT_WIDTH {
            return Err(GeneratorError::ConfigError(format!(
                "indent must be at most {MAX_INDENT_WIDTH} characters, got {}",
                self.indent.len()
            )));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(GeneratorError::ConfigError(format!(
                "indent must consist of spaces or tabs, got {:?}",
                self.indent
            )));
        }
        if self.request_module.trim().is_empty() || self.context_module.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "import module paths must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The operation kind for `api` under these options.
    ///
    /// Unrecognized methods count as writes when `operation_from_method` is on.
    pub fn operation_kind(&self, api: &ApiDescriptor) -> OperationKind {
        if !self.operation_from_method {
            return OperationKind::Query;
        }
        match api.rest_method() {
            Some(method) if method.is_read_only() => OperationKind::Query,
            _ => OperationKind::Mutation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_volume_api, get_item_api};

    #[test]
    fn defaults_match_documented_values() {
        let options = GeneratorOptions::default();
        assert_eq!(options.indent, "  ");
        assert!(!options.operation_from_method);
        assert!(options.detect_collisions);
        assert_eq!(options.request_module, "../../utils/request");
        assert_eq!(options.context_module, "overlord-server");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn operation_is_always_query_by_default() {
        let options = GeneratorOptions::default();
        assert_eq!(options.operation_kind(&create_volume_api()), OperationKind::Query);
    }

    #[test]
    fn operation_follows_method_when_enabled() {
        let options = GeneratorOptions {
            operation_from_method: true,
            ..GeneratorOptions::default()
        };
        assert_eq!(options.operation_kind(&get_item_api()), OperationKind::Query);
        assert_eq!(options.operation_kind(&create_volume_api()), OperationKind::Mutation);

        let mut custom = get_item_api();
        custom.method = "SUBSCRIBE".to_string();
        assert_eq!(options.operation_kind(&custom), OperationKind::Mutation);
    }

    #[test]
    fn operation_kind_names() {
        assert_eq!(OperationKind::Query.to_string(), "query");
        assert_eq!(OperationKind::Mutation.to_string(), "mutation");
        assert_eq!(OperationKind::Mutation.decorator(), "Mutation");
    }

    #[test]
    fn invalid_indent_is_rejected() {
        let empty = GeneratorOptions {
            indent: String::new(),
            ..GeneratorOptions::default()
        };
        assert!(matches!(empty.validate(), Err(GeneratorError::ConfigError(_))));

        let dots = GeneratorOptions {
            indent: "..".to_string(),
            ..GeneratorOptions::default()
        };
        let err = dots.validate().unwrap_err();
        assert!(err.to_string().contains("spaces or tabs"));
    }

    #[test]
    fn indent_width_is_bounded() {
        let widest = GeneratorOptions::default().with_indent_spaces(MAX_INDENT_WIDTH);
        assert!(widest.validate().is_ok());

        let too_wide = GeneratorOptions::default().with_indent_spaces(MAX_INDENT_WIDTH + 1);
        let err = too_wide.validate().unwrap_err();
        assert!(err.to_string().contains("at most 16"));
    }

    #[test]
    fn empty_module_path_is_rejected() {
        let options = GeneratorOptions {
            request_module: " ".to_string(),
            ..GeneratorOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
