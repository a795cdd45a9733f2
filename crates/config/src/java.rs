// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Java application image configuration.
//!
//! Holds the inputs needed to derive a container image for a JVM
//! application and owns the [`ExecInstructionComposer`] used to override the
//! generated entry point.

use crate::composer::ExecInstructionComposer;
use jd_core::{Environment, ExecArgs, SystemEnvironment};
use serde::Serialize;

/// Base image used when none is configured
pub const DEFAULT_BASE_IMAGE: &str = "openjdk:jre-alpine";

/// Port exposed when none is configured
pub const DEFAULT_PORT: u16 = 8080;

/// Maintainer used when the environment reports no user identity
pub const UNKNOWN_MAINTAINER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JavaApplicationConfig {
    base_image: String,
    maintainer: String,
    /// Declaration order of the exposed ports
    ports: Vec<u16>,
    tag: Option<String>,
    jvm_args: Vec<String>,
    #[serde(skip)]
    exec: ExecInstructionComposer,
}

impl JavaApplicationConfig {
    /// Configuration with defaults; the maintainer comes from `env`.
    pub fn new(env: &impl Environment) -> Self {
        Self {
            base_image: DEFAULT_BASE_IMAGE.to_string(),
            maintainer: env.user_name().unwrap_or_else(|| UNKNOWN_MAINTAINER.to_string()),
            ports: vec![DEFAULT_PORT],
            tag: None,
            jvm_args: Vec::new(),
            exec: ExecInstructionComposer::new(),
        }
    }

    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn jvm_args(&self) -> &[String] {
        &self.jvm_args
    }

    jd_core::setters! {
        into {
            set_base_image => base_image: String,
            set_maintainer => maintainer: String,
        }
        set {
            set_ports => ports: Vec<u16>,
            set_tag => tag: Option<String>,
            set_jvm_args => jvm_args: Vec<String>,
        }
    }

    /// Replace the exec overrides.
    ///
    /// Prior overrides are discarded before `configure` runs, so evaluating
    /// the same configuration twice leaves one copy of its instructions.
    pub fn configure_exec_instructions<F>(&mut self, configure: F) -> &mut ExecInstructionComposer
    where
        F: FnOnce(&mut ExecInstructionComposer),
    {
        if !self.exec.is_empty() {
            tracing::debug!(
                discarded = self.exec.instructions().len(),
                "replacing exec instruction overrides"
            );
        }
        self.exec.clear();
        configure(&mut self.exec);
        let instructions = self.exec.instructions();
        let deferred = instructions
            .iter()
            .filter(|i| i.exec_args().is_some_and(ExecArgs::is_deferred))
            .count();
        tracing::debug!(count = instructions.len(), deferred, "exec instructions configured");
        &mut self.exec
    }

    /// Current exec overrides; empty when the generated entry point applies.
    pub fn exec_instruction(&self) -> &ExecInstructionComposer {
        &self.exec
    }
}

impl Default for JavaApplicationConfig {
    fn default() -> Self {
        Self::new(&SystemEnvironment)
    }
}

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;
