// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jd-core: build manifest model for javadock

pub mod macros;

pub mod dockerfile;
pub mod environment;
pub mod error;
pub mod instruction;
pub mod provider;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dockerfile::Dockerfile;
pub use environment::{Environment, FakeEnvironment, SystemEnvironment};
pub use error::ResolveError;
pub use instruction::{ExecArgs, Instruction, LINE_SEPARATOR};
pub use provider::{Property, Provider};
