// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;
use std::path::PathBuf;

use ixpatch::error::IxError;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let ix_error: IxError = io_error.into();

    match ix_error {
        IxError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_config_error_display() {
    let error = IxError::Config("config file not found: maps.toml".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: config file not found: maps.toml"
    );
}

#[test]
fn test_invalid_target_dir_display() {
    let error = IxError::InvalidTargetDir(PathBuf::from("/nope"));
    assert_eq!(error.to_string(), "Not a valid directory: /nope");
}

#[test]
fn test_errors_convert_into_anyhow() {
    let error: anyhow::Error = IxError::Toml("bad".to_string()).into();
    assert_eq!(error.to_string(), "TOML error: bad");
}
