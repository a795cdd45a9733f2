// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

pub use jd_config::{
    parse_build_file_with_format, render, ExecInstructionComposer, Format, JavaApplicationConfig,
    Project,
};
pub use jd_core::test_support::tester_env;
pub use jd_core::{ExecArgs, Instruction, Property, ResolveError, LINE_SEPARATOR};

/// Fresh configuration for a user named `tester`.
pub fn config() -> JavaApplicationConfig {
    JavaApplicationConfig::new(&tester_env())
}

/// Project `shop` with its main class set.
pub fn project() -> Project {
    let project = Project::new("shop");
    project.main_class.set("com.example.Main");
    project
}

/// Render a build file written in `format`.
pub fn render_build_file(content: &str, format: Format) -> Result<String, ResolveError> {
    let (config, project) =
        parse_build_file_with_format(content, format).unwrap().resolve(&tester_env()).unwrap();
    render(&config, &project)
}

/// Lines of rendered text, without the trailing separator.
pub fn lines(text: &str) -> Vec<&str> {
    text.split(LINE_SEPARATOR).filter(|line| !line.is_empty()).collect()
}
