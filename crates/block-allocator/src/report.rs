// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Plain-text rendering of inputs and results.
//!
//! Display numbering is 1-based for both processes and blocks; a process
//! without a block is shown as [`NOT_ALLOCATED`].

use crate::AllocationOutcome;
use std::fmt::Write;

/// Marker shown in place of a block number for an unallocated process.
pub const NOT_ALLOCATED: &str = "Not Allocated";

const COLUMNS: [&str; 3] = ["Process No.", "Process Size", "Block Allocated"];

/// Formats a zero-based block assignment for display.
pub fn block_label(slot: Option<usize>) -> String {
    match slot {
        Some(block) => (block + 1).to_string(),
        None => NOT_ALLOCATED.to_string(),
    }
}

/// Renders the result table: one row per process, in input order.
///
/// ```
/// use block_allocator::{first_fit, render_table};
///
/// let table = render_table(&[30, 90], &first_fit(&[50], &[30, 90]));
/// assert!(table.contains("Not Allocated"));
/// ```
pub fn render_table(processes: &[i64], outcome: &AllocationOutcome) -> String {
    let [c0, c1, c2] = COLUMNS;
    let (w0, w1) = (c0.len(), c1.len());

    let mut out = String::new();
    let _ = writeln!(out, "{c0:<w0$}  {c1:<w1$}  {c2}");
    let _ = writeln!(out, "{}", "-".repeat(w0 + w1 + c2.len() + 4));

    for (i, &size) in processes.iter().enumerate() {
        let label = block_label(outcome.block_for(i));
        let _ = writeln!(out, "{:<w0$}  {:<w1$}  {}", i + 1, size, label);
    }
    out
}

/// Renders the current inputs as two comma-separated lines.
pub fn render_inputs(blocks: &[i64], processes: &[i64]) -> String {
    format!(
        "Memory Blocks: {}\nProcesses: {}\n",
        join(blocks),
        join(processes),
    )
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
