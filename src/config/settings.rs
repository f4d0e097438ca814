// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Patch settings
//!
//! Built-in defaults mirror the mapping tables the tool was written for.
//! A TOML file can replace any of them, and CLI flags win over both.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

mod io;

/// Fixed location of TrueNAS app configuration folders
pub const DEFAULT_TARGET_DIR: &str = "/mnt/.ix-apps/app_configs";

/// Which apps get patched, and with what
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Directory holding one folder per app
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// App folder name -> icon URL (written to `metadata.icon`)
    #[serde(default = "default_icons")]
    pub icons: BTreeMap<String, String>,

    /// App folder name -> Web UI URL (written to `portals["Web UI"]`)
    #[serde(default = "default_webui")]
    pub webui: BTreeMap<String, String>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            icons: default_icons(),
            webui: default_webui(),
        }
    }
}

impl PatchConfig {
    /// Config with the given maps and no built-in entries
    pub fn new(
        target_dir: impl Into<PathBuf>,
        icons: BTreeMap<String, String>,
        webui: BTreeMap<String, String>,
    ) -> Self {
        Self {
            target_dir: target_dir.into(),
            icons,
            webui,
        }
    }

    /// Override the target directory if one was given
    pub fn with_target_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.target_dir = dir;
        }
        self
    }

    pub fn icon_for(&self, app: &str) -> Option<&str> {
        self.icons.get(app).map(String::as_str)
    }

    pub fn webui_for(&self, app: &str) -> Option<&str> {
        self.webui.get(app).map(String::as_str)
    }

    /// Whether either table names this app
    pub fn is_mapped(&self, app: &str) -> bool {
        self.icons.contains_key(app) || self.webui.contains_key(app)
    }
}

fn default_target_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_DIR)
}

fn default_icons() -> BTreeMap<String, String> {
    [
        ("emby", "https://img.xxx.com/docker/emby.svg"),
        ("syncthing", "https://img.xxx.com/docker/syncthing.svg"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_webui() -> BTreeMap<String, String> {
    [
        ("emby", "http://10.10.10.100:8096/"),
        ("syncthing", "http://10.10.10.100:20910/"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
