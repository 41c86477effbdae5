// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod example;
pub mod interactive;
pub mod run;

use anyhow::Context;
use simulation::{OutputFormat, RunReport, SimulationConfig};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
/// Logs go to stderr so JSON on stdout stays machine-readable.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SimulationConfig> {
    match path {
        Some(path) => {
            let config = SimulationConfig::from_file(path)
                .with_context(|| format!("failed to load config from '{}'", path.display()))?;
            tracing::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(SimulationConfig::default()),
    }
}

/// Writes a run report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        OutputFormat::Table => {
            writeln!(out, "{}", report.table())?;
            writeln!(out, "  Remaining capacity:")?;
            for line in report.remaining().lines() {
                writeln!(out, "   {line}")?;
            }
            writeln!(out)?;
            writeln!(out, "  {}", report.stats.summary())?;
        }
    }
    Ok(())
}

/// Prints the boxed title used by the table output.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> anyhow::Result<()> {
    const WIDTH: usize = 54;
    writeln!(out, "╔{}╗", "═".repeat(WIDTH))?;
    writeln!(out, "║{:^width$}║", format!("fitsim · {title}"), width = WIDTH)?;
    writeln!(out, "╚{}╝", "═".repeat(WIDTH))?;
    writeln!(out)?;
    Ok(())
}
