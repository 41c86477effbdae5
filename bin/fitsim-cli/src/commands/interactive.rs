// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim interactive` command: build the lists one entry at a time.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! block <size>     add a memory block        (alias: b)
//! process <size>   add a process             (alias: p)
//! run              allocate and print the table
//! show             print the current lists
//! clear            empty both lists
//! help             list commands
//! quit             leave                     (alias: exit, EOF)
//! ```
//!
//! Bad input is reported and the session carries on.

use super::write_report;
use block_allocator::AllocationStrategy;
use simulation::{OutputFormat, Session, SimulationConfig, SimulationError};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  block <size>     add a memory block
  process <size>   add a process
  run              run First Fit and show the allocation
  show             show the current blocks and processes
  clear            remove all blocks and processes
  help             show this message
  quit             leave";

pub fn execute(config: SimulationConfig, allow_negative: bool) -> anyhow::Result<()> {
    let config = SimulationConfig {
        allow_negative: config.allow_negative || allow_negative,
        ..config
    };
    let strategy = config.create_strategy()?;
    // Values from a config file seed the session.
    let mut session = config.to_session()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{HELP}")?;
    writeln!(out)?;
    drive(
        &mut session,
        strategy.as_ref(),
        config.output,
        stdin.lock(),
        &mut out,
    )
}

/// Runs the command loop until `quit` or end of input.
pub fn drive<R: BufRead, W: Write>(
    session: &mut Session,
    strategy: &dyn AllocationStrategy,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    write!(out, "{}", session.display())?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next().unwrap_or("");

        match command.as_str() {
            "" => continue,
            "block" | "b" => match session.add_block(arg) {
                Ok(size) => writeln!(out, "Success: Added Memory Block of size {size}")?,
                Err(e) => report_error(out, &e)?,
            },
            "process" | "p" => match session.add_process(arg) {
                Ok(size) => writeln!(out, "Success: Added Process of size {size}")?,
                Err(e) => report_error(out, &e)?,
            },
            "run" => match session.run(strategy) {
                Ok(report) => write_report(out, &report, format)?,
                Err(e) => report_error(out, &e)?,
            },
            "show" => write!(out, "{}", session.display())?,
            "clear" => {
                session.clear();
                writeln!(out, "Cleared all memory blocks and processes")?;
            }
            "help" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Error: unknown command '{other}' (type 'help')")?,
        }
    }

    Ok(())
}

fn report_error<W: Write>(out: &mut W, err: &SimulationError) -> std::io::Result<()> {
    tracing::debug!("interactive command failed: {err}");
    writeln!(out, "Error: {err}")
}
