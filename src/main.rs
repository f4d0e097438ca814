// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! ixpatch - set TrueNAS app icons and Web UI links
//!
//! Entry point for the ixpatch CLI.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use ixpatch::cli::Cli;
use ixpatch::config::PatchConfig;
use ixpatch::logging;
use ixpatch::patcher::Patcher;
use ixpatch::report;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = logging::env_filter_from_env(cli.log_directives());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut stderr = io::stderr();
            let _ = stderr.execute(SetForegroundColor(Color::Red));
            eprintln!("Error: {:#}", e);
            let _ = stderr.execute(ResetColor);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = PatchConfig::load(cli.config.as_deref())
        .context("failed to load config")?
        .with_target_dir(cli.target_dir.clone());

    let mut stdout = io::stdout().lock();
    report::print_header(&mut stdout, &config)?;

    let run_report = Patcher::new(&config).dry_run(cli.dry_run).run()?;

    let color = stdout.is_terminal();
    report::print_report(&mut stdout, &run_report, color)?;
    stdout.flush()?;
    Ok(())
}
