// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`AllocationStrategy`] trait and its implementation.

pub mod first_fit;

use crate::AllocationOutcome;

/// Trait for placement strategies.
///
/// A strategy takes the original block capacities and the process sizes
/// and produces an [`AllocationOutcome`]. Strategies never modify their
/// inputs and keep no state between calls, so one instance can serve any
/// number of independent runs.
pub trait AllocationStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Places every process and reports the resulting block capacities.
    fn allocate(&self, blocks: &[i64], processes: &[i64]) -> AllocationOutcome;
}
