// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! App metadata documents
//!
//! Loads a `metadata.yaml` as a generic YAML mapping, sets `metadata.icon`
//! and `portals["Web UI"]` when they differ from the mapped URLs, and
//! serializes it back. Keys that are not touched keep their order.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{IxError, Result};

/// Section holding the display icon
pub const METADATA_KEY: &str = "metadata";
/// Icon URL key inside `metadata`
pub const ICON_KEY: &str = "icon";
/// Section holding exposed portals
pub const PORTALS_KEY: &str = "portals";
/// Web UI portal key inside `portals`
pub const WEB_UI_KEY: &str = "Web UI";

/// Which fields a patch actually changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub icon: bool,
    pub web_ui: bool,
}

impl Changes {
    pub fn is_modified(&self) -> bool {
        self.icon || self.web_ui
    }

    /// Short field list for status output, e.g. "icon, Web UI"
    pub fn describe(&self) -> String {
        let mut fields = Vec::new();
        if self.icon {
            fields.push("icon");
        }
        if self.web_ui {
            fields.push(WEB_UI_KEY);
        }
        fields.join(", ")
    }
}

/// A parsed `metadata.yaml`
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    root: Mapping,
}

impl MetadataDocument {
    /// Parse document text. An empty or null document becomes an empty mapping.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(content)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(IxError::NotAMapping {
                path: path.to_path_buf(),
                found: value_kind(&other).to_string(),
            }),
        }
    }

    /// Read and parse a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    pub fn icon(&self) -> Option<&Value> {
        self.root.get(METADATA_KEY)?.get(ICON_KEY)
    }

    pub fn web_ui(&self) -> Option<&Value> {
        self.root.get(PORTALS_KEY)?.get(WEB_UI_KEY)
    }

    /// Set `metadata.icon`. Returns true if the value changed.
    pub fn set_icon(&mut self, url: &str) -> bool {
        set_if_changed(&mut self.root, METADATA_KEY, ICON_KEY, url)
    }

    /// Set `portals["Web UI"]`. Returns true if the value changed.
    pub fn set_web_ui(&mut self, url: &str) -> bool {
        set_if_changed(&mut self.root, PORTALS_KEY, WEB_UI_KEY, url)
    }

    /// Apply whichever mapped URLs exist for an app
    pub fn apply(&mut self, icon: Option<&str>, web_ui: Option<&str>) -> Changes {
        Changes {
            icon: icon.is_some_and(|url| self.set_icon(url)),
            web_ui: web_ui.is_some_and(|url| self.set_web_ui(url)),
        }
    }

    /// Serialize back to YAML, keeping key order
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }
}

impl Default for MetadataDocument {
    fn default() -> Self {
        Self {
            root: Mapping::new(),
        }
    }
}

/// Write `root[section][key] = url` unless it already holds exactly that string.
/// A missing or non-mapping section is replaced by an empty mapping first.
fn set_if_changed(root: &mut Mapping, section: &str, key: &str, url: &str) -> bool {
    let new_value = Value::String(url.to_string());

    if root.get(section).and_then(|s| s.get(key)) == Some(&new_value) {
        return false;
    }

    let slot = root.entry(Value::from(section)).or_insert(Value::Null);
    match slot {
        Value::Mapping(section) => {
            section.insert(Value::from(key), new_value);
        }
        other => {
            let mut section = Mapping::new();
            section.insert(Value::from(key), new_value);
            *other = Value::Mapping(section);
        }
    }
    true
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
