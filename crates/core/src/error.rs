// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while turning instructions into manifest text.

use thiserror::Error;

/// A deferred value could not be produced when its text was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The provider had no value at serialization time.
    #[error("{what} has no value")]
    Unresolved { what: String },
    /// The provider produced a value that still references unknown placeholders.
    #[error("{what} references unknown placeholder(s): {placeholders}")]
    UnknownPlaceholder { what: String, placeholders: String },
}

impl ResolveError {
    pub fn unresolved(what: impl Into<String>) -> Self {
        Self::Unresolved { what: what.into() }
    }
}
