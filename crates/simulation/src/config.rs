// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Simulation configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! blocks = [100, 500, 200, 300, 600]
//! processes = [212, 417, 112, 426]
//! strategy = "first-fit"
//! allow_negative = false
//! output = "table"
//! ```

use crate::{Session, SimulationError, SizePolicy};
use block_allocator::{AllocationStrategy, FirstFit};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How a run report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(SimulationError::Config(format!(
                "unknown output format '{other}'; expected 'table' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Configuration for one simulation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    /// Memory block capacities, in scan order.
    #[serde(default)]
    pub blocks: Vec<i64>,
    /// Process sizes, in arrival order.
    #[serde(default)]
    pub processes: Vec<i64>,
    /// Strategy name. Only `"first-fit"` (alias `"first"`) exists.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Accept negative sizes instead of rejecting them.
    #[serde(default)]
    pub allow_negative: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_strategy() -> String {
    "first-fit".to_string()
}

impl SimulationConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SimulationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SimulationError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SimulationError> {
        toml::from_str(toml_str)
            .map_err(|e| SimulationError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SimulationError> {
        toml::to_string_pretty(self)
            .map_err(|e| SimulationError::Config(format!("TOML serialise error: {e}")))
    }

    /// The classic textbook exercise used in most OS course notes.
    pub fn textbook() -> Self {
        Self {
            blocks: vec![100, 500, 200, 300, 600],
            processes: vec![212, 417, 112, 426],
            ..Default::default()
        }
    }

    pub fn policy(&self) -> SizePolicy {
        SizePolicy::from_allow_negative(self.allow_negative)
    }

    /// Creates the strategy named by this config.
    pub fn create_strategy(&self) -> Result<Box<dyn AllocationStrategy>, SimulationError> {
        match self.strategy.to_lowercase().as_str() {
            "first-fit" | "first" => Ok(Box::new(FirstFit::new())),
            other => Err(SimulationError::Config(format!(
                "unknown strategy '{other}'; expected 'first-fit'"
            ))),
        }
    }

    /// Builds a session holding this config's blocks and processes.
    ///
    /// Every value goes through the session's size policy, so a config
    /// with negative sizes fails here unless `allow_negative` is set.
    pub fn to_session(&self) -> Result<Session, SimulationError> {
        let mut session = Session::new(self.policy());
        for &size in &self.blocks {
            session.push_block(size)?;
        }
        for &size in &self.processes {
            session.push_process(size)?;
        }
        Ok(session)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            processes: Vec::new(),
            strategy: default_strategy(),
            allow_negative: false,
            output: OutputFormat::Table,
        }
    }
}
