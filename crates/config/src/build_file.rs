// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative build file model.
//!
//! ```hcl
//! project {
//!   group      = "com.example"
//!   name       = "shop"
//!   version    = "1.2.0"
//!   main_class = "com.example.Main"
//! }
//!
//! java_application {
//!   base_image = "eclipse-temurin:21-jre"
//!   ports      = [8080, 9090]
//!   exec {
//!     entry_point = ["java", "-cp", "/app/classes", "${project.main_class}"]
//!     cmd         = ["--serve"]
//!   }
//! }
//! ```
//!
//! Fields left out keep the [`JavaApplicationConfig`] defaults.

use crate::java::JavaApplicationConfig;
use crate::parser::ParseError;
use crate::project::Project;
use crate::template;
use jd_core::Environment;
use serde::{Deserialize, Serialize};

/// Placeholders exec arguments may reference.
pub const PROJECT_VARS: &[&str] =
    &["project.group", "project.name", "project.version", "project.main_class"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuildFile {
    #[serde(default)]
    pub project: Option<ProjectDef>,
    #[serde(default)]
    pub java_application: Option<JavaApplicationDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDef {
    #[serde(default)]
    pub group: Option<String>,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub main_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JavaApplicationDef {
    #[serde(default)]
    pub base_image: Option<String>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub ports: Option<Vec<u16>>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub jvm_args: Option<Vec<String>>,
    #[serde(default)]
    pub exec: Option<ExecDef>,
}

/// Exec override block. `entry_point` is registered before `cmd`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExecDef {
    #[serde(default)]
    pub entry_point: Option<Vec<String>>,
    #[serde(default)]
    pub cmd: Option<Vec<String>>,
}

impl BuildFile {
    /// Check values the type system does not.
    pub fn validate(&self) -> Result<(), ParseError> {
        if let Some(project) = &self.project {
            if project.name.trim().is_empty() {
                return Err(invalid("project.name", "must not be empty"));
            }
        }
        if let Some(app) = &self.java_application {
            app.validate()?;
        }
        Ok(())
    }

    pub fn project(&self) -> Result<Project, ParseError> {
        let def = self.project.as_ref().ok_or(ParseError::MissingBlock("project"))?;
        let mut project = Project::new(def.name.clone());
        project.group = def.group.clone();
        project.version = def.version.clone();
        if let Some(class) = &def.main_class {
            project.main_class.set(class.clone());
        }
        Ok(project)
    }

    /// Build the project and the configuration it describes.
    pub fn resolve<E>(&self, env: &E) -> Result<(JavaApplicationConfig, Project), ParseError>
    where
        E: Environment + 'static,
    {
        let project = self.project()?;
        let mut config = JavaApplicationConfig::new(env);
        if let Some(app) = &self.java_application {
            app.apply_to(&mut config, &project, env);
        }
        Ok((config, project))
    }
}

impl JavaApplicationDef {
    fn validate(&self) -> Result<(), ParseError> {
        if let Some(image) = &self.base_image {
            if image.trim().is_empty() {
                return Err(invalid("java_application.base_image", "must not be empty"));
            }
        }
        if let Some(ports) = &self.ports {
            if ports.contains(&0) {
                return Err(invalid("java_application.ports", "port 0 cannot be exposed"));
            }
        }
        if let Some(exec) = &self.exec {
            for (field, args) in exec.fields() {
                for arg in args {
                    for name in template::placeholder_names(arg) {
                        if !PROJECT_VARS.contains(&name.as_str()) {
                            return Err(invalid(
                                &format!("java_application.exec.{field}"),
                                &format!("unknown placeholder '${{{name}}}'"),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply the fields present in the file on top of `config`.
    ///
    /// An `exec` block goes through
    /// [`JavaApplicationConfig::configure_exec_instructions`], so applying
    /// twice replaces rather than appends.
    pub fn apply_to<E>(&self, config: &mut JavaApplicationConfig, project: &Project, env: &E)
    where
        E: Environment + 'static,
    {
        if let Some(image) = &self.base_image {
            config.set_base_image(image.clone());
        }
        if let Some(maintainer) = &self.maintainer {
            config.set_maintainer(maintainer.clone());
        }
        if let Some(ports) = &self.ports {
            config.set_ports(ports.clone());
        }
        if let Some(tag) = &self.tag {
            config.set_tag(Some(tag.clone()));
        }
        if let Some(args) = &self.jvm_args {
            config.set_jvm_args(args.clone());
        }
        let Some(exec) = &self.exec else {
            return;
        };
        if exec.entry_point.is_none() && exec.cmd.is_none() {
            tracing::warn!("exec block declares neither entry_point nor cmd; using generated entry point");
        }
        let vars = project.vars();
        config.configure_exec_instructions(|composer| {
            if let Some(args) = &exec.entry_point {
                composer.entry_point(template::exec_args(
                    "java_application.exec.entry_point",
                    args.clone(),
                    &vars,
                    env,
                ));
            }
            if let Some(args) = &exec.cmd {
                composer.default_command(template::exec_args(
                    "java_application.exec.cmd",
                    args.clone(),
                    &vars,
                    env,
                ));
            }
        });
    }
}

impl ExecDef {
    fn fields(&self) -> impl Iterator<Item = (&'static str, &Vec<String>)> {
        [("entry_point", self.entry_point.as_ref()), ("cmd", self.cmd.as_ref())]
            .into_iter()
            .filter_map(|(field, args)| args.map(|a| (field, a)))
    }
}

fn invalid(location: &str, message: &str) -> ParseError {
    ParseError::InvalidFormat { location: location.to_string(), message: message.to_string() }
}

#[cfg(test)]
#[path = "build_file_tests.rs"]
mod tests;
