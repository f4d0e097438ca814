// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Every flag is optional; running with none patches the built-in
//! TrueNAS app config directory with the built-in maps.

use clap::Parser;
use std::path::PathBuf;

/// ixpatch - set TrueNAS app icons and Web UI links in metadata.yaml
#[derive(Parser, Debug, Default)]
#[command(name = "ixpatch")]
#[command(
    version,
    about = "Set TrueNAS app icons and Web UI links in metadata.yaml"
)]
pub struct Cli {
    /// Directory holding one folder per app (defaults to /mnt/.ix-apps/app_configs)
    #[arg(short = 'd', long)]
    pub target_dir: Option<PathBuf>,

    /// TOML file with `target_dir`, `[icons]` and `[webui]` tables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show what would change without writing files or backups
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log directives enabled by `-v` / `-vv`
    pub fn log_directives(&self) -> &'static [&'static str] {
        match self.verbose {
            0 => &[],
            1 => &["ixpatch=info"],
            _ => &["ixpatch=debug"],
        }
    }
}
