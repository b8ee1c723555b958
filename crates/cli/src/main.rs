//! Sole Street CLI - Dataset validation and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Check the bundled dataset for schema and integrity problems
//! ss-cli validate
//!
//! # Validate a different dataset file
//! ss-cli validate --data path/to/footwear.json
//!
//! # Build a larger dataset for pagination testing (20x the products)
//! ss-cli seed --multiply 20 --out /tmp/footwear-large.json
//! ```
//!
//! # Commands
//!
//! - `validate` - Load a dataset and report integrity problems
//! - `seed` - Multiply a dataset into a larger one with fresh ids

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Default location of the bundled dataset, relative to the workspace root.
const DEFAULT_DATASET: &str = "crates/storefront/data/footwear.json";

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(author, version, about = "Sole Street CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a product dataset
    Validate {
        /// Path to the dataset JSON file
        #[arg(long, default_value = DEFAULT_DATASET)]
        data: PathBuf,
    },
    /// Multiply a dataset into a larger one for pagination testing
    Seed {
        /// Path to the source dataset JSON file
        #[arg(long, default_value = DEFAULT_DATASET)]
        data: PathBuf,

        /// How many copies of the dataset to emit
        #[arg(short, long, default_value_t = 20)]
        multiply: u32,

        /// Where to write the multiplied dataset
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate { data } => commands::validate::run(&data)?,
        Commands::Seed {
            data,
            multiply,
            out,
        } => commands::seed::run(&data, multiply, &out)?,
    }
    Ok(())
}
