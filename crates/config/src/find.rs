// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build file discovery

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for, in order of preference.
pub const BUILD_FILE_NAMES: &[&str] = &["javadock.hcl", "javadock.toml", "javadock.json"];

/// Errors from build file discovery
#[derive(Debug, Error)]
pub enum FindError {
    #[error("multiple build files in {}: {}; pass one explicitly", dir.display(), names.join(", "))]
    Ambiguous { dir: PathBuf, names: Vec<String> },
    #[error("no build file ({}) in {}", BUILD_FILE_NAMES.join(", "), dir.display())]
    NotFound { dir: PathBuf },
}

/// Locate the single build file in `dir`.
pub fn find_build_file(dir: &Path) -> Result<PathBuf, FindError> {
    let found: Vec<PathBuf> =
        BUILD_FILE_NAMES.iter().map(|name| dir.join(name)).filter(|p| p.is_file()).collect();
    match found.as_slice() {
        [] => Err(FindError::NotFound { dir: dir.to_path_buf() }),
        [path] => {
            tracing::debug!(path = %path.display(), "found build file");
            Ok(path.clone())
        }
        many => Err(FindError::Ambiguous {
            dir: dir.to_path_buf(),
            names: many
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect(),
        }),
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
