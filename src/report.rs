// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Run outcomes and console rendering
//!
//! Status text is built as plain strings so it can be tested; color is
//! applied only when printing.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::config::PatchConfig;
use crate::document::Changes;
use crate::patcher::METADATA_FILE;

/// Width of the `-` separator line
pub const SEPARATOR_WIDTH: usize = 40;

/// What happened to one app folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOutcome {
    /// File rewritten
    Updated {
        app: String,
        backup: PathBuf,
        /// False when an earlier backup was kept instead
        backup_created: bool,
        changes: Changes,
    },
    /// Dry run: file would have been rewritten
    WouldUpdate { app: String, changes: Changes },
    /// Unmapped app, or mapped values already match
    Unchanged { app: String },
    /// Folder has no metadata.yaml
    Skipped { app: String },
    /// Read, parse or write error
    Failed { app: String, error: String },
}

impl AppOutcome {
    pub fn app(&self) -> &str {
        match self {
            AppOutcome::Updated { app, .. }
            | AppOutcome::WouldUpdate { app, .. }
            | AppOutcome::Unchanged { app }
            | AppOutcome::Skipped { app }
            | AppOutcome::Failed { app, .. } => app,
        }
    }

    /// One-word status, used in logs
    pub fn status(&self) -> &'static str {
        match self {
            AppOutcome::Updated { .. } => "updated",
            AppOutcome::WouldUpdate { .. } => "would-update",
            AppOutcome::Unchanged { .. } => "unchanged",
            AppOutcome::Skipped { .. } => "skipped",
            AppOutcome::Failed { .. } => "failed",
        }
    }

    /// Human readable status line
    pub fn status_line(&self) -> String {
        match self {
            AppOutcome::Updated {
                app,
                backup,
                backup_created,
                changes,
            } => {
                let backup_note = if *backup_created {
                    "original backed up to"
                } else {
                    "existing backup kept at"
                };
                format!(
                    "✓ Updated {}/{} ({}), {} {}",
                    app,
                    METADATA_FILE,
                    changes.describe(),
                    backup_note,
                    backup.display()
                )
            }
            AppOutcome::WouldUpdate { app, changes } => format!(
                "• Would update {}/{} ({})",
                app,
                METADATA_FILE,
                changes.describe()
            ),
            AppOutcome::Unchanged { app } => format!("  {}: no changes needed", app),
            AppOutcome::Skipped { app } => {
                format!("  Skipping {}: no {} file", app, METADATA_FILE)
            }
            AppOutcome::Failed { app, error } => {
                format!("✗ Error processing {}: {}", app, error)
            }
        }
    }

    /// Foreground color for the status line, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            AppOutcome::Updated { .. } | AppOutcome::WouldUpdate { .. } => Some(Color::Green),
            AppOutcome::Unchanged { .. } => None,
            AppOutcome::Skipped { .. } => Some(Color::Yellow),
            AppOutcome::Failed { .. } => Some(Color::Red),
        }
    }
}

/// All outcomes of one pass
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<AppOutcome>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            dry_run,
        }
    }

    pub fn push(&mut self, outcome: AppOutcome) {
        self.outcomes.push(outcome);
    }

    /// Updated files (or files that would be updated in a dry run)
    pub fn updated(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                AppOutcome::Updated { .. } | AppOutcome::WouldUpdate { .. }
            )
        })
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, AppOutcome::Unchanged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, AppOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, AppOutcome::Failed { .. }))
    }

    pub fn get(&self, app: &str) -> Option<&AppOutcome> {
        self.outcomes.iter().find(|o| o.app() == app)
    }

    fn count(&self, pred: impl Fn(&AppOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(*o)).count()
    }

    pub fn summary_line(&self) -> String {
        let verb = if self.dry_run { "would update" } else { "updated" };
        format!(
            "{} {}, {} unchanged, {} skipped, {} failed",
            self.updated(),
            verb,
            self.unchanged(),
            self.skipped(),
            self.failed()
        )
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Print both mapping tables followed by a separator
pub fn print_header(out: &mut impl Write, config: &PatchConfig) -> io::Result<()> {
    print_map(out, "Icon map:", &config.icons)?;
    print_map(out, "Web UI map:", &config.webui)?;
    writeln!(out)?;
    writeln!(out, "{}", separator())
}

fn print_map(out: &mut impl Write, title: &str, map: &BTreeMap<String, String>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    for (app, url) in map {
        writeln!(out, "{}: {}", app, url)?;
    }
    Ok(())
}

/// Print one status line; `color` is false when the output is not a terminal
pub fn print_outcome(out: &mut impl Write, outcome: &AppOutcome, color: bool) -> io::Result<()> {
    match outcome.color().filter(|_| color) {
        Some(color) => {
            out.execute(SetForegroundColor(color))?;
            writeln!(out, "{}", outcome.status_line())?;
            out.execute(ResetColor)?;
        }
        None => writeln!(out, "{}", outcome.status_line())?,
    }
    Ok(())
}

/// Print every outcome, then the summary footer
pub fn print_report(out: &mut impl Write, report: &RunReport, color: bool) -> io::Result<()> {
    for outcome in &report.outcomes {
        print_outcome(out, outcome, color)?;
    }

    writeln!(out, "{}", separator())?;
    writeln!(out, "{}", report.summary_line())?;
    if report.dry_run {
        writeln!(out, "Dry run complete, no files were written.")?;
    } else {
        writeln!(out, "Icon and Web UI update complete.")?;
    }
    writeln!(out, "{}", separator())
}
