// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fitsim example` command: the textbook exercise, no input needed.

use simulation::{OutputFormat, SimulationConfig};

pub fn execute(format: Option<OutputFormat>) -> anyhow::Result<()> {
    let config = SimulationConfig {
        output: format.unwrap_or_default(),
        ..SimulationConfig::textbook()
    };
    let stdout = std::io::stdout();
    super::run::render(&config, &mut stdout.lock())
}
