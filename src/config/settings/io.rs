// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use crate::error::{IxError, Result};

use super::PatchConfig;

impl PatchConfig {
    /// Load a config from a TOML file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(IxError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: PatchConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Built-in defaults, or the given file when present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_none_is_default() {
        let config = PatchConfig::load(None).unwrap();
        assert_eq!(config, PatchConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = PatchConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, IxError::Config(_)));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ixpatch.toml");
        std::fs::write(
            &path,
            "target_dir = \"/srv/apps\"\n\n[icons]\njellyfin = \"https://example.com/j.svg\"\n",
        )
        .unwrap();

        let config = PatchConfig::load_from(&path).unwrap();
        assert_eq!(config.target_dir, PathBuf::from("/srv/apps"));
        // A supplied table replaces the built-in one entirely
        assert_eq!(config.icons.len(), 1);
        assert_eq!(
            config.icon_for("jellyfin"),
            Some("https://example.com/j.svg")
        );
        assert_eq!(config.webui, PatchConfig::default().webui);
    }

    #[test]
    fn test_invalid_toml_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[icons\n").unwrap();

        let err = PatchConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, IxError::Toml(_)));
    }
}
