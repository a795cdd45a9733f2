// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jd show`: display the resolved configuration.

use super::Loaded;
use crate::color;
use crate::output::{field_rows, to_json, OutputFormat};
use anyhow::Result;
use jd_config::{JavaApplicationConfig, Project};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ShowView<'a> {
    path: &'a Path,
    config: &'a JavaApplicationConfig,
    project: &'a Project,
    tag: String,
    exec: Vec<String>,
}

/// One line per exec override, or a marker naming the value still missing.
pub fn exec_lines(config: &JavaApplicationConfig) -> Vec<String> {
    config
        .exec_instruction()
        .instructions()
        .iter()
        .map(|instruction| match instruction.text() {
            Ok(text) => text,
            Err(err) => format!("{} <unresolved: {err}>", instruction.keyword()),
        })
        .collect()
}

pub fn format_text(loaded: &Loaded) -> String {
    let config = &loaded.config;
    let project = &loaded.project;

    let tag = match config.tag() {
        Some(tag) => tag.to_string(),
        None => format!("{} {}", project.default_tag(), color::context("(default)")),
    };
    let ports = config.ports().iter().map(u16::to_string).collect::<Vec<_>>().join(", ");
    let main_class = project
        .main_class
        .get()
        .unwrap_or_else(|| color::context("(not set)"));
    let exec = exec_lines(config);
    let exec = if exec.is_empty() {
        color::context("(generated)")
    } else {
        exec.join("\n")
    };

    field_rows(&[
        ("file", loaded.path.display().to_string()),
        ("project", project.name.clone()),
        ("main_class", main_class),
        ("tag", tag),
        ("base_image", config.base_image().to_string()),
        ("maintainer", config.maintainer().to_string()),
        ("ports", ports),
        ("jvm_args", config.jvm_args().join(" ")),
        ("exec", exec),
    ])
}

pub fn format_json(loaded: &Loaded) -> Result<String> {
    to_json(&ShowView {
        path: &loaded.path,
        config: &loaded.config,
        project: &loaded.project,
        tag: jd_config::image_tag(&loaded.config, &loaded.project),
        exec: exec_lines(&loaded.config),
    })
}

pub fn handle(format: OutputFormat, loaded: Loaded) -> Result<()> {
    let out = match format {
        OutputFormat::Text => format_text(&loaded),
        OutputFormat::Json => format_json(&loaded)?,
    };
    print!("{out}");
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
