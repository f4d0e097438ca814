// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use ixpatch::config::{PatchConfig, DEFAULT_TARGET_DIR};
use tempfile::TempDir;

#[test]
fn test_defaults_cover_both_apps() {
    let config = PatchConfig::default();
    assert_eq!(config.target_dir, PathBuf::from(DEFAULT_TARGET_DIR));
    for app in ["emby", "syncthing"] {
        assert!(config.icon_for(app).is_some());
        assert!(config.webui_for(app).is_some());
    }
    assert_eq!(config.webui_for("emby"), Some("http://10.10.10.100:8096/"));
}

#[test]
fn test_full_file_replaces_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ixpatch.toml");
    std::fs::write(
        &path,
        r#"
target_dir = "/mnt/tank/apps"

[icons]
jellyfin = "https://cdn.example.com/jellyfin.svg"

[webui]
jellyfin = "http://192.168.1.5:8096/"
"Home Assistant" = "http://192.168.1.5:8123/"
"#,
    )
    .unwrap();

    let config = PatchConfig::load(Some(&path)).unwrap();
    assert_eq!(config.target_dir, PathBuf::from("/mnt/tank/apps"));
    assert!(config.icon_for("emby").is_none());
    assert_eq!(
        config.webui_for("Home Assistant"),
        Some("http://192.168.1.5:8123/")
    );
    assert!(config.is_mapped("jellyfin"));
}

#[test]
fn test_cli_target_dir_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ixpatch.toml");
    std::fs::write(&path, "target_dir = \"/from/file\"\n").unwrap();

    let config = PatchConfig::load(Some(&path))
        .unwrap()
        .with_target_dir(Some(PathBuf::from("/from/cli")));
    assert_eq!(config.target_dir, PathBuf::from("/from/cli"));
}

#[test]
fn test_wrong_value_type_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ixpatch.toml");
    std::fs::write(&path, "[icons]\nemby = 3\n").unwrap();
    assert!(PatchConfig::load(Some(&path)).is_err());
}
