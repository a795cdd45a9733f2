// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod dockerfile;
pub mod show;
pub mod tag;

use crate::exit_error::ExitError;
use jd_config::{JavaApplicationConfig, Project};
use jd_core::SystemEnvironment;
use std::path::{Path, PathBuf};

/// A build file resolved into configuration.
pub struct Loaded {
    pub path: PathBuf,
    pub config: JavaApplicationConfig,
    pub project: Project,
}

/// Load `file`, or the build file found in `cwd` when none is given.
pub fn load(file: Option<&Path>, cwd: &Path) -> Result<Loaded, ExitError> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => jd_config::find_build_file(cwd)?,
    };
    let build_file = jd_config::load_build_file(&path)?;
    let (config, project) = build_file.resolve(&SystemEnvironment)?;
    Ok(Loaded { path, config, project })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
