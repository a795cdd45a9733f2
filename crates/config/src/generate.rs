// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dockerfile generation for a Java application.
//!
//! The image copies the project's dependency jars, resources and classes
//! under `/app` and runs the main class with a classpath over them. When the
//! configuration registers exec overrides they replace the generated entry
//! point wholesale: nothing is synthesized for a missing `ENTRYPOINT` or `CMD`.

use crate::java::JavaApplicationConfig;
use crate::project::Project;
use jd_core::{Dockerfile, ExecArgs, Instruction, ResolveError};

/// Working directory inside the image
pub const APP_DIR: &str = "/app";

/// Directories copied into [`APP_DIR`], in copy order
pub const COPY_DIRS: &[&str] = &["libs", "resources", "classes"];

/// Classpath of the generated entry point
pub const CLASSPATH: &str = "/app/resources:/app/classes:/app/libs/*";

/// Label carrying the maintainer
pub const MAINTAINER_LABEL: &str = "maintainer";

/// Build the Dockerfile for `config`.
///
/// Nothing is resolved here; deferred values (the main class, placeholder
/// arguments) are read when the result is rendered.
pub fn generate(config: &JavaApplicationConfig, project: &Project) -> Dockerfile {
    let mut dockerfile = Dockerfile::new();
    dockerfile
        .from(config.base_image())
        .label(MAINTAINER_LABEL, config.maintainer())
        .work_dir(APP_DIR);
    for dir in COPY_DIRS {
        dockerfile.copy(*dir, format!("{dir}/"));
    }

    let overrides = config.exec_instruction();
    if overrides.is_empty() {
        tracing::debug!(project = %project.name, "using generated entry point");
        dockerfile.entry_point(default_entry_point(config, project));
    } else {
        tracing::debug!(
            project = %project.name,
            count = overrides.instructions().len(),
            "using exec instruction overrides"
        );
        dockerfile.instruction(Instruction::from(overrides));
    }

    if !config.ports().is_empty() {
        dockerfile.expose(config.ports().iter().copied());
    }
    dockerfile
}

/// `java <jvm args> -cp <classpath> <main class>`, with the main class read
/// from the project when resolved.
pub fn default_entry_point(config: &JavaApplicationConfig, project: &Project) -> ExecArgs {
    let jvm_args = config.jvm_args().to_vec();
    project
        .main_class
        .provider()
        .map(move |main_class| {
            let mut args = Vec::with_capacity(jvm_args.len() + 4);
            args.push("java".to_string());
            args.extend(jvm_args.iter().cloned());
            args.push("-cp".to_string());
            args.push(CLASSPATH.to_string());
            args.push(main_class);
            args
        })
        .into()
}

/// Tag of the image: the configured one, or the project's default.
pub fn image_tag(config: &JavaApplicationConfig, project: &Project) -> String {
    match config.tag() {
        Some(tag) => tag.to_string(),
        None => project.default_tag(),
    }
}

/// Generate and render in one step.
pub fn render(config: &JavaApplicationConfig, project: &Project) -> Result<String, ResolveError> {
    generate(config, project).render()
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
