// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fitsim
//!
//! Command-line front end for the First Fit memory allocation simulator.
//!
//! ## Usage
//! ```bash
//! # One-shot run from flags
//! fitsim run --blocks 100,500,200,300,600 --processes 212,417,112,426
//!
//! # One-shot run from a TOML file, printed as JSON
//! fitsim --config sim.toml run --format json
//!
//! # Enter blocks and processes one at a time
//! fitsim interactive
//!
//! # The classic textbook exercise
//! fitsim example
//! ```

mod commands;

use clap::{Parser, Subcommand};
use simulation::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fitsim",
    about = "First Fit memory allocation simulator",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a list of processes into a list of memory blocks.
    Run {
        /// Comma-separated memory block sizes (e.g., "100,500,200").
        #[arg(short, long, allow_hyphen_values = true)]
        blocks: Option<String>,

        /// Comma-separated process sizes (e.g., "212,417").
        #[arg(short, long, allow_hyphen_values = true)]
        processes: Option<String>,

        /// Output format: table or json.
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Accept negative sizes instead of rejecting them.
        #[arg(long)]
        allow_negative: bool,
    },

    /// Build the block and process lists one entry at a time.
    Interactive {
        /// Accept negative sizes instead of rejecting them.
        #[arg(long)]
        allow_negative: bool,
    },

    /// Run the classic textbook exercise.
    Example {
        /// Output format: table or json.
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            blocks,
            processes,
            format,
            allow_negative,
        } => commands::run::execute(config, blocks, processes, format, allow_negative),
        Commands::Interactive { allow_negative } => {
            commands::interactive::execute(config, allow_negative)
        }
        Commands::Example { format } => commands::example::execute(format),
    }
}
