// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary entry point: parses CLI flags, loads configuration, wires up
//! logging, and hands off to [`posh::repl::ReplDriver`].

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use posh::config::ShellConfig;
use posh::repl::ReplDriver;

#[derive(Parser, Debug)]
#[command(name = "posh", about = "An interactive POSIX-flavored shell")]
struct Cli {
    /// Override the config file location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override where history is persisted.
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Skip loading configuration entirely.
    #[arg(long)]
    no_rc: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = if cli.no_rc {
        ShellConfig::default()
    } else {
        let path = cli.config.or_else(ShellConfig::default_path);
        match path {
            Some(path) => ShellConfig::load(&path),
            None => ShellConfig::default(),
        }
    };

    let history_file = cli.history_file.unwrap_or_else(|| config.history_file());

    let driver = match ReplDriver::new(config, history_file) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("posh: failed to start line editor: {err}");
            std::process::exit(1);
        }
    };

    std::process::exit(driver.run());
}
