// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for ixpatch
//!
//! Holds the target directory and the icon / Web UI mapping tables.

pub mod settings;

pub use settings::*;
