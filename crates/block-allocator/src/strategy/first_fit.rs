// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! First Fit placement.
//!
//! Each process goes into the lowest-indexed block whose *current*
//! remaining capacity can hold it. A block that has already received
//! processes stays in the scan with its reduced capacity, so one large
//! partition can absorb several small requests.
//!
//! # When to use
//! - Teaching and comparison baseline: the cheapest scan that still
//!   reuses partially consumed blocks.
//! - It is a heuristic, not an optimiser. A process can be rejected even
//!   though a different earlier placement would have made room for it.

use crate::strategy::AllocationStrategy;
use crate::AllocationOutcome;

/// First Fit: first block, in input order, that is large enough.
#[derive(Debug, Clone, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl AllocationStrategy for FirstFit {
    fn name(&self) -> &str {
        "first-fit"
    }

    fn allocate(&self, blocks: &[i64], processes: &[i64]) -> AllocationOutcome {
        first_fit(blocks, processes)
    }
}

/// Runs First Fit on a working copy of `blocks`.
///
/// The caller's slices are left untouched; the returned outcome carries
/// the assignment for each process and the post-run capacity of each
/// block.
pub fn first_fit(blocks: &[i64], processes: &[i64]) -> AllocationOutcome {
    let mut remaining = blocks.to_vec();
    let assignments = first_fit_in_place(&mut remaining, processes);

    let outcome = AllocationOutcome::new(assignments, remaining);
    tracing::info!(
        "first-fit placed {}/{} processes into {} blocks",
        outcome.num_allocated(),
        processes.len(),
        blocks.len(),
    );
    outcome
}

/// Runs First Fit directly against `blocks`, shrinking each chosen block
/// by the size placed into it.
///
/// Returns one entry per process: the index of the receiving block, or
/// `None` when no block had room. `processes` is never modified.
pub fn first_fit_in_place(blocks: &mut [i64], processes: &[i64]) -> Vec<Option<usize>> {
    let mut assignments = Vec::with_capacity(processes.len());

    for (process, &size) in processes.iter().enumerate() {
        let slot = blocks.iter().position(|&free| free >= size);

        match slot {
            Some(block) => {
                // Only a negative size can push this past i64::MAX.
                blocks[block] = blocks[block].saturating_sub(size);
                tracing::debug!(
                    process,
                    size,
                    block,
                    remaining = blocks[block],
                    "placed process"
                );
            }
            None => {
                tracing::debug!(process, size, "no block large enough");
            }
        }

        assignments.push(slot);
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_scenario() {
        let blocks = [100, 500, 200, 300, 600];
        let processes = [212, 417, 112, 426];

        let outcome = first_fit(&blocks, &processes);
        assert_eq!(outcome.assignments(), &[Some(1), Some(4), Some(1), None]);
        assert_eq!(outcome.remaining(), &[100, 176, 200, 300, 183]);
    }

    #[test]
    fn test_no_blocks() {
        let outcome = first_fit(&[], &[10, 20]);
        assert_eq!(outcome.assignments(), &[None, None]);
        assert!(outcome.remaining().is_empty());
    }

    #[test]
    fn test_no_processes() {
        let outcome = first_fit(&[50], &[]);
        assert!(outcome.assignments().is_empty());
        assert_eq!(outcome.remaining(), &[50]);
    }

    #[test]
    fn test_zero_sized_processes_take_first_block() {
        let outcome = first_fit(&[10, 10], &[0, 0, 0]);
        assert_eq!(outcome.assignments(), &[Some(0), Some(0), Some(0)]);
        assert_eq!(outcome.remaining(), &[10, 10]);
    }

    #[test]
    fn test_zero_sized_process_fits_exhausted_block() {
        let outcome = first_fit(&[5, 8], &[5, 0]);
        assert_eq!(outcome.assignments(), &[Some(0), Some(0)]);
        assert_eq!(outcome.remaining(), &[0, 8]);
    }

    #[test]
    fn test_exact_fit_consumes_block() {
        let outcome = first_fit(&[30, 40], &[30, 1, 40]);
        // 30 empties block 0, so 1 goes to block 1 and 40 no longer fits.
        assert_eq!(outcome.assignments(), &[Some(0), Some(1), None]);
        assert_eq!(outcome.remaining(), &[0, 39]);
    }

    #[test]
    fn test_block_reused_until_exhausted() {
        let outcome = first_fit(&[100], &[40, 40, 40, 20]);
        assert_eq!(outcome.assignments(), &[Some(0), Some(0), None, Some(0)]);
        assert_eq!(outcome.remaining(), &[0]);
    }

    #[test]
    fn test_order_sensitive() {
        let processes = [60, 50];
        let a = first_fit(&[60, 110], &processes);
        let b = first_fit(&[110, 60], &processes);

        assert_eq!(a.assignments(), &[Some(0), Some(1)]);
        assert_eq!(b.assignments(), &[Some(0), Some(0)]);
        assert_ne!(a.assignments(), b.assignments());
    }

    #[test]
    fn test_not_optimal() {
        // Best placement would be 20 -> block 1, 50 -> block 0.
        let outcome = first_fit(&[50, 20], &[20, 50]);
        assert_eq!(outcome.assignments(), &[Some(0), None]);
    }

    #[test]
    fn test_negative_block_never_fits_non_negative_process() {
        let outcome = first_fit(&[-5, 10], &[0, 3]);
        assert_eq!(outcome.assignments(), &[Some(1), Some(1)]);
        assert_eq!(outcome.remaining(), &[-5, 7]);
    }

    #[test]
    fn test_negative_process_grows_block() {
        let outcome = first_fit(&[-5, 10], &[-7]);
        assert_eq!(outcome.assignments(), &[Some(0)]);
        assert_eq!(outcome.remaining(), &[2, 10]);
    }

    #[test]
    fn test_extreme_negative_saturates() {
        let outcome = first_fit(&[i64::MAX], &[i64::MIN]);
        assert_eq!(outcome.assignments(), &[Some(0)]);
        assert_eq!(outcome.remaining(), &[i64::MAX]);
    }

    #[test]
    fn test_in_place_mutates_blocks_only() {
        let mut blocks = vec![100, 500, 200, 300, 600];
        let processes = vec![212, 417, 112, 426];

        let assignments = first_fit_in_place(&mut blocks, &processes);
        assert_eq!(assignments, vec![Some(1), Some(4), Some(1), None]);
        assert_eq!(blocks, vec![100, 176, 200, 300, 183]);
        assert_eq!(processes, vec![212, 417, 112, 426]);
    }

    #[test]
    fn test_pure_entry_leaves_input_alone() {
        let blocks = vec![10, 20];
        let first = first_fit(&blocks, &[15, 5]);
        let second = first_fit(&blocks, &[15, 5]);

        assert_eq!(blocks, vec![10, 20]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(FirstFit::new().name(), "first-fit");
    }

    #[test]
    fn test_strategy_matches_function() {
        let blocks = [7, 3, 9];
        let processes = [3, 3, 3, 3, 3];
        let via_trait = FirstFit::new().allocate(&blocks, &processes);
        assert_eq!(via_trait, first_fit(&blocks, &processes));
    }
}
