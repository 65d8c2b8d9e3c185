//! Artifact assembly and file writing.
//!
//! This module is the generation entry point: it validates the options and
//! the descriptor, runs the three generators and bundles their output. It can
//! also write the artifacts next to each other the way a TypeScript project
//! consumes them:
//!
//! ```text
//! <output_dir>/
//! ├── <stem>.gql     # Query document with fragments
//! ├── typeDefs.ts    # type-graphql classes (with imports)
//! └── resolvers.ts   # Resolver wrapper (with imports)
//! ```
//!
//! Files are written atomically (temp file + rename).

use std::fs;
use std::path::Path;

use api2gql_define::ApiDescriptor;
use colored::Colorize;
use tracing::{debug, info};

use crate::codegen::{
    TYPE_DEFS_IMPORTS, generate_query, generate_resolver, generate_type_defs, resolver_imports,
};
use crate::document::Document;
use crate::errors::GeneratorError;
use crate::options::GeneratorOptions;
use crate::validation::validate_descriptor;

/// File name of the type declarations artifact.
pub const TYPE_DEFS_FILE: &str = "typeDefs.ts";

/// File name of the resolver artifact.
pub const RESOLVERS_FILE: &str = "resolvers.ts";

/// The three generated texts for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    /// GraphQL query document.
    pub query: String,
    /// TypeScript type declarations.
    pub type_defs: String,
    /// Resolver wrapper.
    pub resolver: String,
}

/// Runs every generator against `api`.
///
/// ## Errors
///
/// Returns `GeneratorError::ConfigError` for invalid options and
/// `GeneratorError::NamingCollision` when collision detection is enabled and
/// two generated names clash.
///
/// ## Examples
///
/// ```
/// use api2gql_define::ApiDescriptor;
/// use api2gql_gen::options::GeneratorOptions;
/// use api2gql_gen::output::generate;
///
/// let api = ApiDescriptor::from_json(r#"{
///     "API_NAME": "GetItem",
///     "METHOD": "GET",
///     "PARAMETERS": ["id (string, required)"],
///     "RESPONSE": { "id": "string" }
/// }"#).unwrap();
///
/// let artifacts = generate(&api, &GeneratorOptions::default()).unwrap();
/// assert!(artifacts.query.starts_with("query getitem("));
/// assert!(artifacts.type_defs.contains("export class ResGetItem {"));
/// assert!(artifacts.resolver.contains("export class GetItemResolver {"));
/// ```
pub fn generate(
    api: &ApiDescriptor,
    options: &GeneratorOptions,
) -> Result<GeneratedArtifacts, GeneratorError> {
    options.validate()?;
    if options.detect_collisions {
        validate_descriptor(api)?;
    }

    let artifacts = GeneratedArtifacts {
        query: generate_query(api, options),
        type_defs: generate_type_defs(api, options),
        resolver: generate_resolver(api, options),
    };

    debug!(
        api = %api.name,
        query_bytes = artifacts.query.len(),
        type_defs_bytes = artifacts.type_defs.len(),
        resolver_bytes = artifacts.resolver.len(),
        "generated artifacts"
    );

    Ok(artifacts)
}

/// Parses a JSON descriptor and generates its artifacts.
///
/// ## Errors
///
/// Any descriptor error (invalid JSON, malformed parameter, empty array,
/// ...) plus the errors of [`generate`].
pub fn generate_from_json(
    json: &str,
    options: &GeneratorOptions,
) -> Result<GeneratedArtifacts, GeneratorError> {
    let api = ApiDescriptor::from_json(json)?;
    generate(&api, options)
}

/// Name of the query file for `stem`.
pub fn query_file_name(stem: &str) -> String {
    format!("{stem}.gql")
}

/// File names and contents, in write order, including import headers.
pub fn artifact_files(
    api: &ApiDescriptor,
    artifacts: &GeneratedArtifacts,
    options: &GeneratorOptions,
    stem: &str,
) -> Vec<(String, String)> {
    let resolver_header = Document::from(resolver_imports(api, options)).render(&options.indent);

    vec![
        (
            RESOLVERS_FILE.to_string(),
            format!("{resolver_header}\n{}", artifacts.resolver),
        ),
        (
            TYPE_DEFS_FILE.to_string(),
            format!("{TYPE_DEFS_IMPORTS}\n\n{}", artifacts.type_defs),
        ),
        (query_file_name(stem), artifacts.query.clone()),
    ]
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    // Write to temp file first
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    // Atomically rename to final path, leaving no temp file behind on failure
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(GeneratorError::WriteError {
            path: path.display().to_string(),
            source: e,
        });
    }

    Ok(())
}

/// Generates all artifacts for `api` and writes them to `output_dir`.
///
/// ## Arguments
///
/// * `api` - The endpoint descriptor
/// * `output_dir` - Directory receiving `<stem>.gql`, `typeDefs.ts`, `resolvers.ts`
/// * `stem` - File stem of the query document
/// * `options` - Generator settings
/// * `dry_run` - If true, print the files instead of writing them
///
/// ## Returns
///
/// The generated artifacts (without import headers).
///
/// ## Errors
///
/// Returns an error if generation fails or a file cannot be written.
pub fn generate_and_write(
    api: &ApiDescriptor,
    output_dir: &Path,
    stem: &str,
    options: &GeneratorOptions,
    dry_run: bool,
) -> Result<GeneratedArtifacts, GeneratorError> {
    if stem.trim().is_empty() {
        return Err(GeneratorError::ConfigError(
            "output file stem must not be empty".to_string(),
        ));
    }

    let artifacts = generate(api, options)?;
    let files = artifact_files(api, &artifacts, options, stem);

    if dry_run {
        for (filename, content) in &files {
            println!("{}\n{}", format!("=== {filename} ===").bold().cyan(), content);
        }
    } else {
        for (filename, content) in &files {
            let path = output_dir.join(filename);
            write_atomic(&path, content)?;
            info!(path = %path.display(), "wrote artifact");
        }
    }

    Ok(artifacts)
}
