// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Batch patching of app configuration folders
//!
//! Walks `<target_dir>/<app>/metadata.yaml` once. Each app is handled on
//! its own: a failure is recorded in the report and the walk moves on.
//! Only an invalid target directory stops the run.

use std::path::{Path, PathBuf};

use crate::config::PatchConfig;
use crate::document::MetadataDocument;
use crate::error::{IxError, Result};
use crate::report::{AppOutcome, RunReport};

/// File patched inside each app folder
pub const METADATA_FILE: &str = "metadata.yaml";

/// Suffix appended to the metadata path for the one-time backup
pub const BACKUP_SUFFIX: &str = ".bak";

/// Runs one patch pass over a target directory
pub struct Patcher<'a> {
    config: &'a PatchConfig,
    dry_run: bool,
}

impl<'a> Patcher<'a> {
    pub fn new(config: &'a PatchConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Report what would change without touching any file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Patch every app folder under the target directory, in name order
    pub fn run(&self) -> Result<RunReport> {
        let target_dir = &self.config.target_dir;
        if !target_dir.is_dir() {
            return Err(IxError::InvalidTargetDir(target_dir.clone()));
        }

        let mut report = RunReport::new(self.dry_run);
        for (app, app_dir) in list_app_dirs(target_dir)? {
            let outcome = self.process_app(&app, &app_dir);
            tracing::debug!(app = %app, status = outcome.status(), "processed app");
            report.push(outcome);
        }

        tracing::info!(
            updated = report.updated(),
            unchanged = report.unchanged(),
            skipped = report.skipped(),
            failed = report.failed(),
            "patch pass finished"
        );
        Ok(report)
    }

    /// Handle a single app folder; never fails, errors become `AppOutcome::Failed`
    pub fn process_app(&self, app: &str, app_dir: &Path) -> AppOutcome {
        let metadata_path = app_dir.join(METADATA_FILE);
        if !metadata_path.is_file() {
            return AppOutcome::Skipped {
                app: app.to_string(),
            };
        }

        match self.patch_file(app, &metadata_path) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(app = %app, path = %metadata_path.display(), error = %e, "failed to patch app");
                AppOutcome::Failed {
                    app: app.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    fn patch_file(&self, app: &str, path: &Path) -> Result<AppOutcome> {
        if !self.config.is_mapped(app) {
            tracing::debug!(app = %app, "not in any mapping, leaving untouched");
            return Ok(AppOutcome::Unchanged {
                app: app.to_string(),
            });
        }

        let mut doc = MetadataDocument::load(path)?;
        let changes = doc.apply(self.config.icon_for(app), self.config.webui_for(app));

        if !changes.is_modified() {
            return Ok(AppOutcome::Unchanged {
                app: app.to_string(),
            });
        }

        if self.dry_run {
            return Ok(AppOutcome::WouldUpdate {
                app: app.to_string(),
                changes,
            });
        }

        let serialized = doc.to_yaml()?;
        let backup = backup_path(path);
        let backup_created = ensure_backup(path, &backup)?;
        std::fs::write(path, serialized)?;

        tracing::info!(
            app = %app,
            fields = %changes.describe(),
            backup_created,
            "updated metadata"
        );

        Ok(AppOutcome::Updated {
            app: app.to_string(),
            backup,
            backup_created,
            changes,
        })
    }
}

/// `<path>.bak`, appended to the full file name
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` to `backup` unless a backup already exists, keeping the
/// permission bits and modification time. Returns true when a new backup was written.
pub fn ensure_backup(path: &Path, backup: &Path) -> Result<bool> {
    if backup.exists() {
        tracing::debug!(backup = %backup.display(), "backup already present, keeping it");
        return Ok(false);
    }
    std::fs::copy(path, backup)?;

    let modified = std::fs::metadata(path)?.modified()?;
    std::fs::File::options()
        .write(true)
        .open(backup)?
        .set_modified(modified)?;
    Ok(true)
}

/// Subdirectories of `dir` as (name, path), sorted by name. Plain files are ignored.
fn list_app_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut apps = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        apps.push((name, path));
    }

    apps.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(apps)
}
