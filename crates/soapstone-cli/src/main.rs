//! Developer command line for the admin message catalog.
//!
//! `shapes` lists the registered catalog, `describe` prints one shape's
//! field table, `skeleton` renders placeholder XML, `check` validates
//! the shape tables, and `catalog` exports descriptor catalogs as JSON,
//! optionally driven by a `soapstone.toml`.

mod config;
mod render;

use crate::{
    config::{CliConfig, ConfigError},
    render::{CatalogExport, ModuleExport, ShapeSummary},
};
use clap::{Parser, Subcommand, ValueEnum};
use soapstone::core::error::RegistryError;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("export serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "soapstone", about = "Developer tools for the admin message catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
enum Command {
    /// Export the descriptor catalog as JSON.
    Catalog {
        /// Config path; `soapstone.toml` is probed when omitted.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Output path, overriding the config.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Validate the shape tables.
    Check,

    /// Print one shape's field table.
    Describe {
        /// Registered shape name, e.g. `GetAccountRequest`.
        #[arg(value_name = "SHAPE")]
        shape: String,
    },

    /// List every registered shape.
    Shapes {
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Render placeholder XML with required fields filled.
    Skeleton {
        /// Registered shape name.
        #[arg(value_name = "SHAPE")]
        shape: String,
    },
}

///
/// Format
///

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Machine-readable JSON.
    Json,
    /// Aligned text for terminals.
    Text,
}

fn main() -> ExitCode {
    match run(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Catalog { config, output } => catalog(config.as_deref(), output),
        Command::Check => check(),
        Command::Describe { shape } => describe(&shape),
        Command::Shapes { format } => shapes(format),
        Command::Skeleton { shape } => skeleton(&shape),
    }
}

fn catalog(config: Option<&Path>, output: Option<PathBuf>) -> Result<(), Error> {
    let config = CliConfig::discover(config)?;

    // only a validated catalog is worth exporting
    soapstone::admin::registry()?;

    let modules: Vec<ModuleExport> = soapstone::admin::modules()
        .iter()
        .filter(|(module, _)| config.catalog.selects(module))
        .map(|&(module, shapes)| ModuleExport { module, shapes })
        .collect();

    let export = CatalogExport {
        version: soapstone::VERSION,
        modules,
    };
    let json = serde_json::to_string_pretty(&export)?;

    match output.or(config.catalog.output) {
        Some(path) => {
            std::fs::write(&path, &json).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            println!("wrote {} ({} modules)", path.display(), export.modules.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn check() -> Result<(), Error> {
    let registry = soapstone::admin::registry()?;
    println!("catalog ok: {} shapes", registry.len());

    Ok(())
}

fn describe(name: &str) -> Result<(), Error> {
    let shape = soapstone::admin::registry()?.require(name)?;
    print!("{}", render::describe(shape));

    Ok(())
}

fn shapes(format: Format) -> Result<(), Error> {
    let registry = soapstone::admin::registry()?;

    match format {
        Format::Json => {
            let summaries: Vec<ShapeSummary> = registry.iter().map(Into::into).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Format::Text => {
            for shape in registry.iter() {
                println!("{}", render::shape_line(shape));
            }
        }
    }

    Ok(())
}

fn skeleton(name: &str) -> Result<(), Error> {
    let shape = soapstone::admin::registry()?.require(name)?;
    print!("{}", render::skeleton(shape));

    Ok(())
}

///
/// TESTS
///
