//! # Sieve
//!
//! Filter a product catalog with composable specifications.
//!
//! ```text
//! sieve sample --output products.json
//! sieve filter --catalog products.json --where color=green
//! sieve filter --catalog products.json --where color=red --where size=large
//! sieve filter --catalog products.json --where size=small --where color=red --any --json
//! sieve filter --catalog products.json --expr spec.json
//! sieve demo
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to override the level.

use clap::{Parser, Subcommand};
use sieve::CliError;
use sieve::cli::{cmd_demo, cmd_filter, cmd_sample};
use sieve::sieve_core::Mode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sieve", version, about = "Filter products with composable specifications")]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the products of a catalog that satisfy a specification.
    Filter {
        /// Catalog file (JSON array of products).
        #[arg(short, long)]
        catalog: PathBuf,

        /// A `field=value` or `field!=value` term; repeatable.
        #[arg(short = 'w', long = "where", value_name = "TERM")]
        terms: Vec<String>,

        /// Match products satisfying any term instead of all terms.
        #[arg(long)]
        any: bool,

        /// JSON specification expression file, combined with the terms by AND.
        #[arg(short, long)]
        expr: Option<PathBuf>,

        /// Print matches as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Run the product-filter demonstration on the sample catalog.
    Demo {
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Write the sample catalog to a file.
    Sample {
        /// Destination file.
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite the destination if it exists.
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Filter {
            catalog,
            terms,
            any,
            expr,
            json,
        } => {
            let mode = if any { Mode::Any } else { Mode::All };
            cmd_filter(&catalog, &terms, mode, expr.as_deref(), json).map(|_| ())
        }
        Commands::Demo { json } => cmd_demo(json),
        Commands::Sample { output, force } => cmd_sample(&output, force),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
