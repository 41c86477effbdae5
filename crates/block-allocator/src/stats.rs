// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Summary statistics for a placement run.
//!
//! [`AllocationStats`] condenses an outcome into the numbers a student
//! usually wants next to the table: how many processes were placed, how
//! much capacity was used, and how much is left scattered across blocks.

use crate::AllocationOutcome;

/// Derived counters for one placement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocationStats {
    /// Number of processes considered.
    pub num_processes: usize,
    /// Number of processes that received a block.
    pub allocated: usize,
    /// Number of processes left without a block.
    pub unallocated: usize,
    /// Number of blocks that received at least one process.
    pub blocks_used: usize,
    /// Sum of all process sizes.
    pub requested: i64,
    /// Sum of the sizes of placed processes.
    pub placed: i64,
    /// Sum of the original block capacities.
    pub total_capacity: i64,
    /// Sum of the block capacities left after the run.
    pub remaining_capacity: i64,
    /// Largest single remaining capacity (0 when there are no blocks).
    pub largest_remaining: i64,
}

impl AllocationStats {
    /// Computes the counters for `outcome`, produced from `blocks` and `processes`.
    pub fn collect(blocks: &[i64], processes: &[i64], outcome: &AllocationOutcome) -> Self {
        let placed = processes
            .iter()
            .zip(outcome.assignments())
            .filter(|(_, slot)| slot.is_some())
            .fold(0i64, |acc, (&size, _)| acc.saturating_add(size));

        let mut used = vec![false; outcome.num_blocks()];
        for block in outcome.assignments().iter().flatten() {
            if let Some(flag) = used.get_mut(*block) {
                *flag = true;
            }
        }

        Self {
            num_processes: outcome.num_processes(),
            allocated: outcome.num_allocated(),
            unallocated: outcome.num_unallocated(),
            blocks_used: used.iter().filter(|&&u| u).count(),
            requested: saturating_sum(processes),
            placed,
            total_capacity: saturating_sum(blocks),
            remaining_capacity: saturating_sum(outcome.remaining()),
            largest_remaining: outcome.remaining().iter().copied().max().unwrap_or(0),
        }
    }

    /// Fraction of the original capacity taken by placed processes, in `[0.0, 1.0]`
    /// for non-negative inputs.
    ///
    /// Returns `0.0` if there is no capacity.
    pub fn utilisation(&self) -> f64 {
        if self.total_capacity <= 0 {
            return 0.0;
        }
        self.placed as f64 / self.total_capacity as f64
    }

    /// Fraction of processes that were placed.
    ///
    /// Returns `0.0` if no processes were given.
    pub fn placement_ratio(&self) -> f64 {
        if self.num_processes == 0 {
            return 0.0;
        }
        self.allocated as f64 / self.num_processes as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Placed {}/{} processes ({} unallocated) into {} blocks, \
             {} of {} units used ({:.1}% utilisation), {} free, largest hole {}",
            self.allocated,
            self.num_processes,
            self.unallocated,
            self.blocks_used,
            self.placed,
            self.total_capacity,
            self.utilisation() * 100.0,
            self.remaining_capacity,
            self.largest_remaining,
        )
    }
}

fn saturating_sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, &v| acc.saturating_add(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_fit;

    #[test]
    fn test_default() {
        let s = AllocationStats::default();
        assert_eq!(s.num_processes, 0);
        assert_eq!(s.utilisation(), 0.0);
        assert_eq!(s.placement_ratio(), 0.0);
    }

    #[test]
    fn test_textbook_counters() {
        let blocks = [100, 500, 200, 300, 600];
        let processes = [212, 417, 112, 426];
        let s = first_fit(&blocks, &processes).stats(&blocks, &processes);

        assert_eq!(s.num_processes, 4);
        assert_eq!(s.allocated, 3);
        assert_eq!(s.unallocated, 1);
        assert_eq!(s.blocks_used, 2);
        assert_eq!(s.requested, 1167);
        assert_eq!(s.placed, 741);
        assert_eq!(s.total_capacity, 1700);
        assert_eq!(s.remaining_capacity, 959);
        assert_eq!(s.largest_remaining, 300);
        assert!((s.placement_ratio() - 0.75).abs() < 1e-9);
        assert!((s.utilisation() - 741.0 / 1700.0).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_conserved() {
        let blocks = [64, 32, 16];
        let processes = [10, 20, 30, 40];
        let s = first_fit(&blocks, &processes).stats(&blocks, &processes);
        assert_eq!(s.placed + s.remaining_capacity, s.total_capacity);
    }

    #[test]
    fn test_no_blocks() {
        let s = first_fit(&[], &[1, 2]).stats(&[], &[1, 2]);
        assert_eq!(s.unallocated, 2);
        assert_eq!(s.blocks_used, 0);
        assert_eq!(s.largest_remaining, 0);
        assert_eq!(s.utilisation(), 0.0);
    }

    #[test]
    fn test_summary() {
        let blocks = [10, 10];
        let processes = [5, 5, 20];
        let s = first_fit(&blocks, &processes).stats(&blocks, &processes);
        let summary = s.summary();
        assert!(summary.contains("Placed 2/3 processes"));
        assert!(summary.contains("1 unallocated"));
        assert!(summary.contains("50.0% utilisation"));
    }
}
