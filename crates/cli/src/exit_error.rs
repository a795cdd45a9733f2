// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

/// Exit code when the build file cannot be found, read or parsed
pub const EXIT_CONFIG: i32 = 2;

/// Exit code when a deferred value is still missing at render time
pub const EXIT_UNRESOLVED: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<jd_config::ParseError> for ExitError {
    fn from(err: jd_config::ParseError) -> Self {
        Self::new(EXIT_CONFIG, err.to_string())
    }
}

impl From<jd_config::FindError> for ExitError {
    fn from(err: jd_config::FindError) -> Self {
        Self::new(EXIT_CONFIG, err.to_string())
    }
}

impl From<jd_core::ResolveError> for ExitError {
    fn from(err: jd_core::ResolveError) -> Self {
        Self::new(EXIT_UNRESOLVED, format!("cannot render Dockerfile: {err}"))
    }
}
