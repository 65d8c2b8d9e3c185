//! api2gql
//!
//! Generates a GraphQL query, TypeScript type declarations and a resolver
//! from a JSON REST endpoint descriptor.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use api2gql_define::ApiDescriptor;
use api2gql_gen::errors::GeneratorError;
use api2gql_gen::options::GeneratorOptions;
use api2gql_gen::output::generate_and_write;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// api2gql - transforms REST endpoint descriptors into GraphQL/TypeScript artifacts
#[derive(Parser, Debug)]
#[command(name = "api2gql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Descriptor JSON file (use "-" for stdin)
    input: PathBuf,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File stem of the query document (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Print generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8))]
    indent: u8,

    /// Emit a mutation for endpoints whose method is not GET or HEAD
    #[arg(long)]
    operation_from_method: bool,

    /// Skip fragment and type name collision checks
    #[arg(long)]
    allow_collisions: bool,

    /// Module path imported for `requestAPI`
    #[arg(long)]
    request_module: Option<String>,

    /// Module path imported for `Context`
    #[arg(long)]
    context_module: Option<String>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    fn options(&self) -> GeneratorOptions {
        let mut options = GeneratorOptions::default().with_indent_spaces(usize::from(self.indent));
        options.operation_from_method = self.operation_from_method;
        options.detect_collisions = !self.allow_collisions;
        if let Some(module) = &self.request_module {
            options.request_module = module.clone();
        }
        if let Some(module) = &self.context_module {
            options.context_module = module.clone();
        }
        options
    }

    fn output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output {
            return dir.clone();
        }
        if self.reads_stdin() {
            return PathBuf::from(".");
        }
        self.input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn stem(&self, api: &ApiDescriptor) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if !self.reads_stdin()
            && let Some(stem) = self.input.file_stem().and_then(|s| s.to_str())
        {
            return stem.to_string();
        }
        api.name.to_lowercase()
    }
}

/// Initialize tracing subscriber from `RUST_LOG`, or else the verbosity level.
///
/// Verbosity levels:
/// - 0 (default): no subscriber unless `RUST_LOG` is set
/// - 1 (-v): INFO (files written)
/// - 2 (-vv): DEBUG (generation steps)
/// - 3+ (-vvv): TRACE
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => return,
            1 => "warn,api2gql=info,api2gql_gen=info,api2gql_define=info".to_string(),
            2 => "info,api2gql=debug,api2gql_gen=debug,api2gql_define=debug".to_string(),
            _ => "debug,api2gql=trace,api2gql_gen=trace,api2gql_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn read_input(cli: &Cli) -> Result<String, GeneratorError> {
    if cli.reads_stdin() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| GeneratorError::ReadError {
                path: "<stdin>".to_string(),
                source: e,
            })?;
        return Ok(buffer);
    }

    std::fs::read_to_string(&cli.input).map_err(|e| GeneratorError::ReadError {
        path: cli.input.display().to_string(),
        source: e,
    })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let json = read_input(cli)?;
    let api = ApiDescriptor::from_json(&json)?;
    info!(
        api = %api.name,
        method = %api.method,
        parameters = api.parameters.len(),
        "loaded descriptor"
    );

    let output_dir = cli.output_dir();
    let stem = cli.stem(&api);
    generate_and_write(&api, &output_dir, &stem, &cli.options(), cli.dry_run)?;

    if !cli.dry_run {
        info!(dir = %output_dir.display(), "generation complete");
    }

    Ok(())
}
