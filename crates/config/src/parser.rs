// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build file parsing
//!
//! Build files are HCL by default; TOML and JSON carry the same structure.

use crate::build_file::BuildFile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Build file syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Hcl,
    Toml,
    Json,
}

jd_core::simple_display! {
    Format {
        Hcl => "hcl",
        Toml => "toml",
        Json => "json",
    }
}

impl Format {
    /// Format for a file, from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("hcl") => Ok(Format::Hcl),
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            other => Err(ParseError::UnsupportedFormat(other.unwrap_or("").to_string())),
        }
    }
}

/// Errors from reading or validating a build file
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported build file extension '{0}' (expected hcl, toml or json)")]
    UnsupportedFormat(String),
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing `{0}` block")]
    MissingBlock(&'static str),
    #[error("invalid {location}: {message}")]
    InvalidFormat { location: String, message: String },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse HCL build file content.
pub fn parse_build_file(content: &str) -> Result<BuildFile, ParseError> {
    parse_build_file_with_format(content, Format::Hcl)
}

/// Parse and validate build file content in the given format.
pub fn parse_build_file_with_format(content: &str, format: Format) -> Result<BuildFile, ParseError> {
    let build_file: BuildFile = match format {
        Format::Hcl => hcl::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    build_file.validate()?;
    Ok(build_file)
}

/// Read and parse a build file, picking the format from its extension.
pub fn load_build_file(path: &Path) -> Result<BuildFile, ParseError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), %format, "parsing build file");
    parse_build_file_with_format(&content, format)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
