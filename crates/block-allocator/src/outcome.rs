// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation outcome: the output of a placement run.
//!
//! An outcome pairs the per-process assignment with a snapshot of every
//! block's remaining capacity after the run. It is the contract between
//! the allocator and whatever presents the result.

use crate::{AllocationStats, AllocatorError};

/// Result of placing a sequence of processes into a sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocationOutcome {
    /// Receiving block index per process, `None` when unallocated.
    assignments: Vec<Option<usize>>,
    /// Remaining capacity per block after all placements.
    remaining: Vec<i64>,
}

impl AllocationOutcome {
    /// Creates an outcome from raw parts.
    pub fn new(assignments: Vec<Option<usize>>, remaining: Vec<i64>) -> Self {
        Self {
            assignments,
            remaining,
        }
    }

    /// Per-process assignment, in process input order.
    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    /// Per-block remaining capacity, in block input order.
    pub fn remaining(&self) -> &[i64] {
        &self.remaining
    }

    /// Returns the block process `process` was placed into.
    ///
    /// `None` both for unallocated processes and out-of-range indices.
    pub fn block_for(&self, process: usize) -> Option<usize> {
        self.assignments.get(process).copied().flatten()
    }

    /// Returns the indices of the processes placed into `block`, in order.
    pub fn processes_in(&self, block: usize) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == Some(block))
            .map(|(process, _)| process)
            .collect()
    }

    /// Number of processes covered by this outcome.
    pub fn num_processes(&self) -> usize {
        self.assignments.len()
    }

    /// Number of blocks covered by this outcome.
    pub fn num_blocks(&self) -> usize {
        self.remaining.len()
    }

    pub fn num_allocated(&self) -> usize {
        self.assignments.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn num_unallocated(&self) -> usize {
        self.num_processes() - self.num_allocated()
    }

    /// Returns `true` if every process received a block.
    pub fn all_allocated(&self) -> bool {
        self.assignments.iter().all(Option::is_some)
    }

    /// Derives summary counters against the inputs of the run.
    pub fn stats(&self, blocks: &[i64], processes: &[i64]) -> AllocationStats {
        AllocationStats::collect(blocks, processes, self)
    }

    /// Validates this outcome against the inputs it was produced from.
    ///
    /// Replays the placements over a fresh copy of `blocks` and checks:
    /// - One assignment per process and one capacity per block.
    /// - Every assigned block index exists.
    /// - Each placement fit the block's capacity at that moment.
    /// - No earlier block could have taken the process (first fit), and no
    ///   block at all could have taken an unallocated one.
    /// - The reported remaining capacities match the replay.
    pub fn validate(&self, blocks: &[i64], processes: &[i64]) -> Result<(), AllocatorError> {
        if self.assignments.len() != processes.len() {
            return Err(AllocatorError::AssignmentCountMismatch {
                expected: processes.len(),
                actual: self.assignments.len(),
            });
        }
        if self.remaining.len() != blocks.len() {
            return Err(AllocatorError::BlockCountMismatch {
                expected: blocks.len(),
                actual: self.remaining.len(),
            });
        }

        let mut free = blocks.to_vec();

        for (process, (&size, &slot)) in processes.iter().zip(&self.assignments).enumerate() {
            let scan_end = match slot {
                Some(block) if block >= free.len() => {
                    return Err(AllocatorError::BlockOutOfRange {
                        process,
                        block,
                        num_blocks: free.len(),
                    });
                }
                Some(block) => block,
                None => free.len(),
            };

            // Nothing before the chosen block (or anywhere, if unallocated) may fit.
            if let Some(earlier) = free[..scan_end].iter().position(|&f| f >= size) {
                return Err(AllocatorError::NotFirstFit {
                    process,
                    block: earlier,
                    size,
                    available: free[earlier],
                });
            }

            if let Some(block) = slot {
                if free[block] < size {
                    return Err(AllocatorError::Overcommitted {
                        process,
                        block,
                        size,
                        available: free[block],
                    });
                }
                free[block] = free[block].saturating_sub(size);
            }
        }

        for (block, (&reported, &expected)) in self.remaining.iter().zip(&free).enumerate() {
            if reported != expected {
                return Err(AllocatorError::CapacityMismatch {
                    block,
                    reported,
                    expected,
                });
            }
        }

        Ok(())
    }
}
