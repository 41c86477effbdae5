// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # block-allocator
//!
//! Places a sequence of process requests into a fixed set of memory
//! partitions using the First Fit heuristic, the way it is taught in
//! operating-systems courses.
//!
//! # Key Components
//!
//! - [`first_fit`] — the pure entry point: takes the block and process
//!   sizes by reference and returns an [`AllocationOutcome`] holding both
//!   the per-process assignment and the remaining capacity of every block.
//! - [`first_fit_in_place`] — the classic form that shrinks the caller's
//!   block slice directly and returns only the assignment.
//! - [`AllocationStrategy`] — the seam hosts program against; [`FirstFit`]
//!   is its implementation.
//! - [`AllocationStats`] — derived counters (placed, rejected, utilisation).
//! - [`render_table`] / [`render_inputs`] — the reference text output.
//!
//! # Placement Rule
//!
//! ```text
//! for each process i (input order):
//!     j = first block with remaining[j] >= size[i]
//!     if found: assign i -> j, remaining[j] -= size[i]
//!     else:     i is unallocated
//! ```
//!
//! The scan never backtracks, never reorders blocks and never merges or
//! splits them. Placement is total: empty inputs, zero sizes and negative
//! sizes all produce a well-defined outcome.
//!
//! # Example
//! ```
//! use block_allocator::first_fit;
//!
//! let blocks = [100, 500, 200, 300, 600];
//! let processes = [212, 417, 112, 426];
//!
//! let outcome = first_fit(&blocks, &processes);
//! assert_eq!(outcome.assignments(), &[Some(1), Some(4), Some(1), None]);
//! assert_eq!(outcome.remaining(), &[100, 176, 200, 300, 183]);
//!
//! // The caller's blocks are untouched.
//! assert_eq!(blocks, [100, 500, 200, 300, 600]);
//! ```

mod error;
mod outcome;
mod report;
mod stats;
pub mod strategy;

pub use error::AllocatorError;
pub use outcome::AllocationOutcome;
pub use report::{block_label, render_inputs, render_table, NOT_ALLOCATED};
pub use stats::AllocationStats;
pub use strategy::first_fit::{first_fit, first_fit_in_place, FirstFit};
pub use strategy::AllocationStrategy;
