// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing of user-entered sizes.

use crate::{SimulationError, SizeField};

/// Parses one entered size.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` sign is
/// accepted; anything else that is not a decimal integer fitting in an
/// `i64` is reported as [`SimulationError::InvalidInput`]. Sign policy is
/// applied separately by the session.
pub fn parse_size(field: SizeField, text: &str) -> Result<i64, SimulationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SimulationError::InvalidInput {
            field,
            input: text.trim().to_string(),
        })
}

/// Parses a comma-separated list of sizes, e.g. `"100, 500,200"`.
///
/// An empty or all-whitespace string yields an empty list.
pub fn parse_size_list(field: SizeField, text: &str) -> Result<Vec<i64>, SimulationError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(|s| parse_size(field, s)).collect()
}
