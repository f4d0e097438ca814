// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for ixpatch
//!
//! A single error enum covers config loading, directory access and
//! per-app document handling.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ixpatch operations
#[derive(Error, Debug)]
pub enum IxError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or serialize errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Target directory missing or not a directory
    #[error("Not a valid directory: {}", .0.display())]
    InvalidTargetDir(PathBuf),

    /// Document root is not a mapping
    #[error("{}: expected a mapping at the document root, found {found}", .path.display())]
    NotAMapping { path: PathBuf, found: String },
}

/// Result type alias for ixpatch operations
pub type Result<T> = std::result::Result<T, IxError>;

impl From<toml::de::Error> for IxError {
    fn from(err: toml::de::Error) -> Self {
        IxError::Toml(err.to_string())
    }
}
