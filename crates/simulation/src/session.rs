// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The simulation session: the block and process lists a user builds up
//! entry by entry, and the runs performed over them.
//!
//! A [`Session`] owns its lists. Runs hand the strategy read-only slices,
//! so the same session can be run any number of times and always yields
//! the same [`RunReport`].

use crate::parse::parse_size;
use crate::{SimulationError, SizeField};
use block_allocator::{
    render_inputs, render_table, AllocationOutcome, AllocationStats, AllocationStrategy,
};

/// What to do with negative sizes entered by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Negative sizes are rejected with [`SimulationError::NegativeSize`].
    #[default]
    Reject,
    /// Negative sizes are accepted and handed to the allocator unchanged.
    Allow,
}

impl SizePolicy {
    pub fn from_allow_negative(allow: bool) -> Self {
        if allow {
            SizePolicy::Allow
        } else {
            SizePolicy::Reject
        }
    }

    fn check(self, field: SizeField, value: i64) -> Result<i64, SimulationError> {
        if value < 0 && self == SizePolicy::Reject {
            tracing::warn!("rejected negative {field} {value}");
            return Err(SimulationError::NegativeSize { field, value });
        }
        Ok(value)
    }
}

/// An interactive simulation session.
///
/// # Example
/// ```
/// use block_allocator::FirstFit;
/// use simulation::Session;
///
/// let mut session = Session::default();
/// session.add_block("100").unwrap();
/// session.add_block("500").unwrap();
/// session.add_process("212").unwrap();
///
/// let report = session.run(&FirstFit::new()).unwrap();
/// assert_eq!(report.outcome.assignments(), &[Some(1)]);
/// assert_eq!(session.blocks(), &[100, 500]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    blocks: Vec<i64>,
    processes: Vec<i64>,
    policy: SizePolicy,
}

impl Session {
    /// Creates an empty session with the given negative-size policy.
    pub fn new(policy: SizePolicy) -> Self {
        Self {
            blocks: Vec::new(),
            processes: Vec::new(),
            policy,
        }
    }

    /// Parses `text` as a block size and appends it. Returns the accepted size.
    pub fn add_block(&mut self, text: &str) -> Result<i64, SimulationError> {
        let size = parse_size(SizeField::Block, text)?;
        self.push_block(size)?;
        Ok(size)
    }

    /// Parses `text` as a process size and appends it. Returns the accepted size.
    pub fn add_process(&mut self, text: &str) -> Result<i64, SimulationError> {
        let size = parse_size(SizeField::Process, text)?;
        self.push_process(size)?;
        Ok(size)
    }

    /// Appends a block size, subject to the session's policy.
    pub fn push_block(&mut self, size: i64) -> Result<(), SimulationError> {
        let size = self.policy.check(SizeField::Block, size)?;
        self.blocks.push(size);
        tracing::debug!(size, count = self.blocks.len(), "added memory block");
        Ok(())
    }

    /// Appends a process size, subject to the session's policy.
    pub fn push_process(&mut self, size: i64) -> Result<(), SimulationError> {
        let size = self.policy.check(SizeField::Process, size)?;
        self.processes.push(size);
        tracing::debug!(size, count = self.processes.len(), "added process");
        Ok(())
    }

    pub fn blocks(&self) -> &[i64] {
        &self.blocks
    }

    pub fn processes(&self) -> &[i64] {
        &self.processes
    }

    pub fn policy(&self) -> SizePolicy {
        self.policy
    }

    /// Removes all blocks and processes; the policy is kept.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.processes.clear();
    }

    /// Renders the current lists.
    pub fn display(&self) -> String {
        render_inputs(&self.blocks, &self.processes)
    }

    /// Runs `strategy` over the current lists.
    ///
    /// Fails with [`SimulationError::NoBlocks`] or
    /// [`SimulationError::NoProcesses`] when either list is empty. The
    /// session's own lists are never modified.
    pub fn run(&self, strategy: &dyn AllocationStrategy) -> Result<RunReport, SimulationError> {
        if self.blocks.is_empty() {
            return Err(SimulationError::NoBlocks);
        }
        if self.processes.is_empty() {
            return Err(SimulationError::NoProcesses);
        }

        let outcome = strategy.allocate(&self.blocks, &self.processes);
        outcome.validate(&self.blocks, &self.processes)?;

        let stats = outcome.stats(&self.blocks, &self.processes);
        tracing::info!("{}: {}", strategy.name(), stats.summary());

        Ok(RunReport {
            strategy: strategy.name().to_string(),
            blocks: self.blocks.clone(),
            processes: self.processes.clone(),
            outcome,
            stats,
        })
    }
}

/// Everything produced by one run: the inputs it saw, the outcome and
/// its statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RunReport {
    /// Name of the strategy that produced the outcome.
    pub strategy: String,
    /// Block capacities before the run.
    pub blocks: Vec<i64>,
    /// Process sizes, in input order.
    pub processes: Vec<i64>,
    pub outcome: AllocationOutcome,
    pub stats: AllocationStats,
}

impl RunReport {
    /// The result table in the reference layout.
    pub fn table(&self) -> String {
        render_table(&self.processes, &self.outcome)
    }

    /// Remaining capacity per block, rendered as `Block N: free` lines.
    pub fn remaining(&self) -> String {
        self.outcome
            .remaining()
            .iter()
            .zip(&self.blocks)
            .enumerate()
            .map(|(i, (free, original))| format!("Block {}: {free} of {original} free\n", i + 1))
            .collect()
    }

    /// Serialises the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::Config(format!("JSON serialise error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_allocator::FirstFit;

    fn textbook() -> Session {
        let mut s = Session::default();
        for b in [100, 500, 200, 300, 600] {
            s.push_block(b).unwrap();
        }
        for p in [212, 417, 112, 426] {
            s.push_process(p).unwrap();
        }
        s
    }

    #[test]
    fn test_add_parses_and_returns_size() {
        let mut s = Session::default();
        assert_eq!(s.add_block(" 64 ").unwrap(), 64);
        assert_eq!(s.add_process("8").unwrap(), 8);
        assert_eq!(s.blocks(), &[64]);
        assert_eq!(s.processes(), &[8]);
    }

    #[test]
    fn test_add_invalid_leaves_session_unchanged() {
        let mut s = Session::default();
        assert!(s.add_block("lots").unwrap_err().is_invalid_input());
        assert!(s.add_process("").unwrap_err().is_invalid_input());
        assert!(s.blocks().is_empty());
        assert!(s.processes().is_empty());
    }

    #[test]
    fn test_reject_policy() {
        let mut s = Session::new(SizePolicy::Reject);
        let err = s.add_block("-10").unwrap_err();
        assert!(matches!(
            err,
            SimulationError::NegativeSize { field: SizeField::Block, value: -10 }
        ));
        assert!(s.blocks().is_empty());
    }

    #[test]
    fn test_allow_policy() {
        let mut s = Session::new(SizePolicy::Allow);
        s.add_block("-10").unwrap();
        s.add_block("20").unwrap();
        s.add_process("-1").unwrap();
        let report = s.run(&FirstFit::new()).unwrap();
        // -10 >= -1 is false, so the process lands in block 1.
        assert_eq!(report.outcome.assignments(), &[Some(1)]);
        assert_eq!(report.outcome.remaining(), &[-10, 21]);
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(SizePolicy::from_allow_negative(true), SizePolicy::Allow);
        assert_eq!(SizePolicy::from_allow_negative(false), SizePolicy::Reject);
        assert_eq!(SizePolicy::default(), SizePolicy::Reject);
    }

    #[test]
    fn test_run_requires_blocks() {
        let mut s = Session::default();
        s.add_process("10").unwrap();
        assert!(matches!(s.run(&FirstFit::new()), Err(SimulationError::NoBlocks)));
    }

    #[test]
    fn test_run_requires_processes() {
        let mut s = Session::default();
        s.add_block("10").unwrap();
        assert!(matches!(s.run(&FirstFit::new()), Err(SimulationError::NoProcesses)));
    }

    #[test]
    fn test_run_checks_blocks_before_processes() {
        let s = Session::default();
        assert!(matches!(s.run(&FirstFit::new()), Err(SimulationError::NoBlocks)));
    }

    #[test]
    fn test_run_textbook() {
        let s = textbook();
        let report = s.run(&FirstFit::new()).unwrap();

        assert_eq!(report.strategy, "first-fit");
        assert_eq!(report.outcome.assignments(), &[Some(1), Some(4), Some(1), None]);
        assert_eq!(report.stats.allocated, 3);
        assert_eq!(s.blocks(), &[100, 500, 200, 300, 600]);
    }

    #[test]
    fn test_repeated_runs_identical() {
        let s = textbook();
        let a = s.run(&FirstFit::new()).unwrap();
        let b = s.run(&FirstFit::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_session_grows_between_runs() {
        let mut s = textbook();
        let before = s.run(&FirstFit::new()).unwrap();
        assert_eq!(before.outcome.block_for(3), None);

        s.add_block("450").unwrap();
        let after = s.run(&FirstFit::new()).unwrap();
        assert_eq!(after.outcome.block_for(3), Some(5));
    }

    #[test]
    fn test_clear_keeps_policy() {
        let mut s = Session::new(SizePolicy::Allow);
        s.add_block("5").unwrap();
        s.add_process("5").unwrap();
        s.clear();
        assert!(s.blocks().is_empty());
        assert!(s.processes().is_empty());
        assert_eq!(s.policy(), SizePolicy::Allow);
    }

    #[test]
    fn test_display() {
        let s = textbook();
        assert_eq!(
            s.display(),
            "Memory Blocks: 100, 500, 200, 300, 600\nProcesses: 212, 417, 112, 426\n"
        );
    }

    #[test]
    fn test_report_table_and_remaining() {
        let report = textbook().run(&FirstFit::new()).unwrap();
        let table = report.table();
        assert!(table.contains("Block Allocated"));
        assert!(table.contains("Not Allocated"));

        let remaining = report.remaining();
        assert!(remaining.contains("Block 2: 176 of 500 free"));
        assert!(remaining.contains("Block 5: 183 of 600 free"));
    }

    #[test]
    fn test_report_json() {
        let report = textbook().run(&FirstFit::new()).unwrap();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["strategy"], "first-fit");
        assert_eq!(value["outcome"]["assignments"][1], 4);
        assert!(value["outcome"]["assignments"][3].is_null());
        assert_eq!(value["stats"]["unallocated"], 1);
    }
}
