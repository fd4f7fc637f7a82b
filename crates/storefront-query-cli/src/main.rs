//! `storefront-query`: inspect how listing URLs parse, mutate, resolve and
//! plan.

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use storefront_query::{
    active::active_filters,
    config::{CatalogConfig, ConfigError},
    mutate::{remove_keys, set_value, toggle_value},
    plan::{QueryDescriptor, build_descriptor},
    source::{CatalogSession, InMemoryCatalog},
};
use thiserror::Error as ThisError;
use tracing_subscriber::EnvFilter;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "storefront-query", version, about, long_about = None)]
struct Cli {
    /// Catalog policy file (TOML); built-in defaults when omitted
    #[arg(short, long, global = true, env = "STOREFRONT_QUERY_CONFIG")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the normalized query as JSON
    Parse { query: String },

    /// Parse then re-serialize a query string
    Stringify { query: String },

    /// Toggle one value under a key
    Toggle {
        query: String,
        key: String,
        value: String,
    },

    /// Replace the values under a key; no values removes it
    Set {
        query: String,
        key: String,
        values: Vec<String>,
    },

    /// Remove keys from the query
    Remove {
        query: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Append the query to a path, keeping any #fragment last
    Url { path: String, query: String },

    /// Print the resolved filter spec as JSON
    Resolve { query: String },

    /// Print the query descriptor and its fingerprint as JSON
    Plan { query: String },

    /// Print the active filter chips as JSON
    Chips { query: String },

    /// Run the query against a JSON product catalog
    List {
        #[arg(long)]
        catalog: PathBuf,
        query: String,
    },
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid catalog '{path}': {source}")]
    Catalog {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    fingerprint: String,
    descriptor: &'a QueryDescriptor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<CatalogConfig, CliError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(CatalogConfig::from_path(path)?)
        }
        None => Ok(CatalogConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let codec = config.codec();

    match cli.command {
        Command::Parse { query } => print_json(&codec.parse(&query))?,
        Command::Stringify { query } => println!("{}", codec.stringify(&codec.parse(&query))),
        Command::Toggle { query, key, value } => {
            let next = toggle_value(&codec.parse(&query), &key, &value);
            println!("{}", codec.stringify(&next));
        }
        Command::Set { query, key, values } => {
            let next = set_value(&codec.parse(&query), &key, values);
            println!("{}", codec.stringify(&next));
        }
        Command::Remove { query, keys } => {
            let next = remove_keys(&codec.parse(&query), &keys);
            println!("{}", codec.stringify(&next));
        }
        Command::Url { path, query } => println!("{}", codec.build_url(&path, &codec.parse(&query))),
        Command::Resolve { query } => {
            print_json(&config.resolver().resolve(&codec.parse(&query)))?;
        }
        Command::Plan { query } => {
            let descriptor = build_descriptor(&config.resolver().resolve(&codec.parse(&query)));

            print_json(&PlanOutput {
                fingerprint: descriptor.fingerprint().as_hex(),
                descriptor: &descriptor,
            })?;
        }
        Command::Chips { query } => print_json(&active_filters(&codec.parse(&query), &config))?,
        Command::List { catalog, query } => {
            let catalog = read_catalog(&catalog)?;
            let session = CatalogSession::new(catalog, &config);
            let Ok(page) = session.list(&query);
            print_json(&page)?;
        }
    }

    Ok(())
}

fn read_catalog(path: &Path) -> Result<InMemoryCatalog, CliError> {
    let display = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: display.clone(),
        source,
    })?;

    InMemoryCatalog::from_json(&source).map_err(|source| CliError::Catalog {
        path: display,
        source,
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
