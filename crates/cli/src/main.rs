// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jd: Dockerfile generator for Java applications

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::dockerfile::DockerfileArgs;
use exit_error::ExitError;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jd",
    version,
    long_version = env::LONG_VERSION,
    styles = color::styles(),
    about = "Generate Dockerfiles for Java applications"
)]
pub(crate) struct Cli {
    /// Build file to read (default: javadock.{hcl,toml,json} in the current directory)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render the Dockerfile
    Dockerfile(DockerfileArgs),
    /// Print the image tag
    Tag,
    /// Show the resolved configuration
    Show {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() {
    env::init_logging();
    if let Err(err) = run(Cli::parse()) {
        let code = match err.downcast_ref::<ExitError>() {
            Some(exit) => exit.code,
            None => 1,
        };
        eprintln!("error: {err:#}");
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = commands::load(cli.file.as_deref(), &cwd)?;
    tracing::debug!(path = %loaded.path.display(), "loaded build file");
    match cli.command {
        Command::Dockerfile(args) => commands::dockerfile::handle(args, loaded)?,
        Command::Tag => commands::tag::handle(loaded),
        Command::Show { format } => commands::show::handle(format, loaded)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
