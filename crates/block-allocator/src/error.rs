// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for allocation outcome validation.
//!
//! Placement itself never fails: every input produces a well-defined
//! outcome. These errors only describe an outcome that does not agree
//! with the inputs it claims to come from.

/// Violations detected by [`crate::AllocationOutcome::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocatorError {
    /// The outcome does not carry exactly one entry per process.
    #[error("outcome has {actual} assignments but {expected} processes were given")]
    AssignmentCountMismatch { expected: usize, actual: usize },

    /// The capacity snapshot does not carry exactly one entry per block.
    #[error("outcome has {actual} remaining capacities but {expected} blocks were given")]
    BlockCountMismatch { expected: usize, actual: usize },

    /// A process was assigned to a block index that does not exist.
    #[error("process {process} assigned to block {block}, but only {num_blocks} blocks exist")]
    BlockOutOfRange {
        process: usize,
        block: usize,
        num_blocks: usize,
    },

    /// A process was placed into a block that could not hold it at the time.
    #[error("process {process} (size {size}) does not fit block {block} with {available} remaining")]
    Overcommitted {
        process: usize,
        block: usize,
        size: i64,
        available: i64,
    },

    /// A process was left out although an earlier block could hold it.
    #[error("process {process} (size {size}) was not placed in block {block} which had {available} free")]
    NotFirstFit {
        process: usize,
        block: usize,
        size: i64,
        available: i64,
    },

    /// The reported remaining capacity disagrees with the replayed placements.
    #[error("block {block} reports {reported} remaining, expected {expected}")]
    CapacityMismatch {
        block: usize,
        reported: i64,
        expected: i64,
    },
}
