// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # simulation
//!
//! The layer between a person typing numbers and the allocator.
//!
//! The allocator in `block-allocator` is total and stateless; everything
//! that can go wrong belongs here:
//!
//! - [`parse_size`] turns entered text into a size, reporting malformed
//!   text as an invalid-input error.
//! - [`Session`] holds the growing block and process lists, applies the
//!   negative-size [`SizePolicy`], and refuses to run with an empty list.
//! - [`SimulationConfig`] describes a whole simulation in TOML.
//!
//! # Example
//! ```
//! use simulation::SimulationConfig;
//!
//! let config = SimulationConfig::textbook();
//! let strategy = config.create_strategy().unwrap();
//! let report = config.to_session().unwrap().run(strategy.as_ref()).unwrap();
//!
//! assert_eq!(report.stats.unallocated, 1);
//! println!("{}", report.table());
//! ```

mod config;
mod error;
mod parse;
mod session;

pub use config::{OutputFormat, SimulationConfig};
pub use error::{SimulationError, SizeField};
pub use parse::{parse_size, parse_size_list};
pub use session::{RunReport, Session, SizePolicy};
