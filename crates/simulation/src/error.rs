// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the simulation boundary.

use std::fmt;

/// Which kind of size a piece of user input was meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Block,
    Process,
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeField::Block => f.write_str("memory block size"),
            SizeField::Process => f.write_str("process size"),
        }
    }
}

/// Errors reported to the user before or around a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The entered text is not a whole number.
    #[error("Enter a valid number for {field}: '{input}'")]
    InvalidInput { field: SizeField, input: String },

    /// The entered number is negative and the session does not allow it.
    #[error("Enter a non-negative number for {field}: got {value}")]
    NegativeSize { field: SizeField, value: i64 },

    /// A run was requested before any memory block was added.
    #[error("Add memory blocks first.")]
    NoBlocks,

    /// A run was requested before any process was added.
    #[error("Add processes first.")]
    NoProcesses,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The strategy produced an outcome that does not match its inputs.
    #[error("allocation invariant violated: {0}")]
    Invariant(#[from] block_allocator::AllocatorError),
}

impl SimulationError {
    /// Returns `true` for errors caused by malformed or disallowed user input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidInput { .. } | SimulationError::NegativeSize { .. }
        )
    }

    /// Returns `true` for errors raised because a run precondition was not met.
    pub fn is_precondition(&self) -> bool {
        matches!(self, SimulationError::NoBlocks | SimulationError::NoProcesses)
    }
}
