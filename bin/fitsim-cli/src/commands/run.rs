// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim run` command: one-shot simulation from flags and/or a config file.
//!
//! Flags override the corresponding config values. Malformed sizes and
//! empty lists surface as errors with a non-zero exit status.

use super::{write_banner, write_report};
use simulation::{parse_size_list, OutputFormat, SimulationConfig, SizeField};
use std::io::Write;

pub fn execute(
    config: SimulationConfig,
    blocks: Option<String>,
    processes: Option<String>,
    format: Option<OutputFormat>,
    allow_negative: bool,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, blocks, processes, format, allow_negative)?;
    let stdout = std::io::stdout();
    render(&config, &mut stdout.lock())
}

/// Merges command-line values over a loaded config.
pub fn apply_overrides(
    mut config: SimulationConfig,
    blocks: Option<String>,
    processes: Option<String>,
    format: Option<OutputFormat>,
    allow_negative: bool,
) -> anyhow::Result<SimulationConfig> {
    if let Some(text) = blocks {
        config.blocks = parse_size_list(SizeField::Block, &text)?;
    }
    if let Some(text) = processes {
        config.processes = parse_size_list(SizeField::Process, &text)?;
    }
    if let Some(format) = format {
        config.output = format;
    }
    config.allow_negative |= allow_negative;
    Ok(config)
}

/// Runs the simulation described by `config` and writes the report.
pub fn render<W: Write>(config: &SimulationConfig, out: &mut W) -> anyhow::Result<()> {
    let strategy = config.create_strategy()?;
    let session = config.to_session()?;
    let report = session.run(strategy.as_ref())?;

    if config.output == OutputFormat::Table {
        write_banner(out, "First Fit Allocation")?;
        writeln!(out, "{}", session.display())?;
    }
    write_report(out, &report, config.output)
}
