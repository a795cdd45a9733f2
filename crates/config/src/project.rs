// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Java project an image is built for.

use jd_core::{Property, Provider};
use serde::Serialize;
use std::collections::HashMap;

/// Version string that means "no version was set"
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// Tag used in place of a missing version
pub const LATEST: &str = "latest";

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
    /// May be set after the configuration that references it
    pub main_class: Property<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            version: None,
            main_class: Property::new("project.main_class"),
        }
    }

    /// `[<group>/]<name>:<version>`, lower-cased.
    ///
    /// A missing or `unspecified` version becomes `latest`; an empty group
    /// is treated as absent.
    pub fn default_tag(&self) -> String {
        let version = match self.version.as_deref() {
            None | Some(UNSPECIFIED_VERSION) | Some("") => LATEST,
            Some(v) => v,
        };
        let name_and_version = format!("{}:{}", self.name, version).to_lowercase();
        match self.group.as_deref() {
            Some(group) if !group.is_empty() => {
                format!("{}/{}", group.to_lowercase(), name_and_version)
            }
            _ => name_and_version,
        }
    }

    /// Placeholder values under the `project.` namespace, read when resolved.
    ///
    /// Absent values are omitted so references to them stay unresolved.
    pub fn vars(&self) -> Provider<HashMap<String, String>> {
        let group = self.group.clone();
        let name = self.name.clone();
        let version = self.version.clone();
        let main_class = self.main_class.clone();
        Provider::from_result("project variables", move || {
            let mut vars = HashMap::new();
            vars.insert("project.name".to_string(), name.clone());
            if let Some(group) = &group {
                vars.insert("project.group".to_string(), group.clone());
            }
            if let Some(version) = &version {
                vars.insert("project.version".to_string(), version.clone());
            }
            if let Some(class) = main_class.get() {
                vars.insert("project.main_class".to_string(), class);
            }
            Ok(vars)
        })
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
