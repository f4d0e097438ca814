// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! ixpatch - batch editor for TrueNAS app `metadata.yaml` files.
//!
//! For every app folder named in the icon or Web UI map, sets
//! `metadata.icon` and `portals["Web UI"]`, keeping a one-time `.bak`
//! copy of the original file.
//!
//! - `config`: target directory and mapping tables
//! - `document`: YAML load / patch / serialize
//! - `patcher`: directory walk, backup and write-back
//! - `report`: per-app outcomes and console output
//! - `logging`: tracing filter built from `RUST_LOG` and `-v`

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod patcher;
pub mod report;

pub use error::{IxError, Result};
