// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jd-config: Java application image configuration and Dockerfile generation

mod build_file;
mod composer;
mod find;
mod generate;
mod java;
mod parser;
mod project;
pub mod template;

pub use build_file::{BuildFile, ExecDef, JavaApplicationDef, ProjectDef, PROJECT_VARS};
pub use composer::ExecInstructionComposer;
pub use find::{find_build_file, FindError, BUILD_FILE_NAMES};
pub use generate::{
    default_entry_point, generate, image_tag, render, APP_DIR, CLASSPATH, COPY_DIRS,
    MAINTAINER_LABEL,
};
pub use java::{JavaApplicationConfig, DEFAULT_BASE_IMAGE, DEFAULT_PORT, UNKNOWN_MAINTAINER};
pub use parser::{
    load_build_file, parse_build_file, parse_build_file_with_format, Format, ParseError,
};
pub use project::{Project, LATEST, UNSPECIFIED_VERSION};
