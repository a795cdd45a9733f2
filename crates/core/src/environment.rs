// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment abstraction for testable ambient defaults

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Variables consulted, in order, for the invoking user's identity.
pub const USER_VARS: &[&str] = &["USER", "USERNAME", "LOGNAME"];

/// Access to the invoking process's environment
pub trait Environment: Clone + Send + Sync {
    fn var(&self, name: &str) -> Option<String>;

    /// Current user identity; empty values count as absent.
    fn user_name(&self) -> Option<String> {
        USER_VARS.iter().filter_map(|name| self.var(name)).find(|v| !v.is_empty())
    }
}

/// Real process environment
#[derive(Clone, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fake environment for testing with controllable variables
#[derive(Clone, Default)]
pub struct FakeEnvironment {
    vars: Arc<Mutex<HashMap<String, String>>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose `USER` is `name`
    pub fn with_user(name: &str) -> Self {
        let env = Self::new();
        env.set("USER", name);
        env
    }

    pub fn set(&self, name: &str, value: &str) {
        self.vars.lock().insert(name.to_string(), value.to_string());
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.lock().get(name).cloned()
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
