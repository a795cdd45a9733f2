// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jd dockerfile`: render the Dockerfile for the build file.

use super::Loaded;
use crate::exit_error::ExitError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DockerfileArgs {
    /// Main class for the generated entry point (overrides the build file)
    #[arg(long)]
    pub main_class: Option<String>,
    /// Write the Dockerfile here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Render the Dockerfile text.
///
/// `--main-class` is applied after the build file is resolved; deferred
/// arguments that reference it pick it up at render time.
pub fn render(args: &DockerfileArgs, loaded: &Loaded) -> Result<String, ExitError> {
    if let Some(main_class) = &args.main_class {
        loaded.project.main_class.set(main_class.clone());
    }
    Ok(jd_config::render(&loaded.config, &loaded.project)?)
}

pub fn handle(args: DockerfileArgs, loaded: Loaded) -> Result<()> {
    let text = render(&args, &loaded)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), source = %loaded.path.display(), "wrote Dockerfile");
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
