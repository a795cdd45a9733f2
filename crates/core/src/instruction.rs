// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build manifest instructions.
//!
//! Each [`Instruction`] is one directive of a Dockerfile-style manifest: a
//! keyword and the text of the line. Exec-form directives (`ENTRYPOINT`,
//! `CMD`) carry [`ExecArgs`], which may be deferred until the text is
//! requested.

use crate::error::ResolveError;
use crate::provider::Provider;
use indexmap::IndexMap;

/// Line separator used when joining instruction text.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Argument vector of an exec-form instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecArgs {
    /// Arguments known at registration.
    Values(Vec<String>),
    /// Arguments computed when the instruction text is produced.
    Deferred(Provider<Vec<String>>),
}

impl ExecArgs {
    pub fn empty() -> Self {
        Self::Values(Vec::new())
    }

    /// Resolve to the concrete argument vector.
    pub fn resolve(&self) -> Result<Vec<String>, ResolveError> {
        match self {
            Self::Values(values) => Ok(values.clone()),
            Self::Deferred(provider) => provider.get(),
        }
    }

    /// Eager arguments, or `None` when deferred.
    #[cfg(any(test, feature = "test-support"))]
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl From<Vec<String>> for ExecArgs {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

impl From<Vec<&str>> for ExecArgs {
    fn from(values: Vec<&str>) -> Self {
        Self::Values(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ExecArgs {
    fn from(values: &[&str]) -> Self {
        Self::Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<&[String]> for ExecArgs {
    fn from(values: &[String]) -> Self {
        Self::Values(values.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for ExecArgs {
    fn from(values: [&str; N]) -> Self {
        Self::Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<Provider<Vec<String>>> for ExecArgs {
    fn from(provider: Provider<Vec<String>>) -> Self {
        Self::Deferred(provider)
    }
}

/// One manifest directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    From { image: String, stage: Option<String> },
    Label(IndexMap<String, String>),
    WorkDir(String),
    Copy { src: String, dest: String, from: Option<String> },
    Run(String),
    Env(IndexMap<String, String>),
    User(String),
    Expose(Vec<u16>),
    EntryPoint(ExecArgs),
    Cmd(ExecArgs),
    /// Several directives emitted as one unit. The keyword is blank: the
    /// members are the real lines.
    Composite(Vec<Instruction>),
}

impl Instruction {
    pub fn from_image(image: impl Into<String>) -> Self {
        Self::From { image: image.into(), stage: None }
    }

    pub fn copy(src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self::Copy { src: src.into(), dest: dest.into(), from: None }
    }

    pub fn label(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Label(IndexMap::from([(key.into(), value.into())]))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::From { .. } => "FROM",
            Self::Label(_) => "LABEL",
            Self::WorkDir(_) => "WORKDIR",
            Self::Copy { .. } => "COPY",
            Self::Run(_) => "RUN",
            Self::Env(_) => "ENV",
            Self::User(_) => "USER",
            Self::Expose(_) => "EXPOSE",
            Self::EntryPoint(_) => "ENTRYPOINT",
            Self::Cmd(_) => "CMD",
            Self::Composite(_) => "",
        }
    }

    /// Whether the instruction has nothing to write: a composite without
    /// members, or a `LABEL`, `ENV` or `EXPOSE` with an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Composite(members) => members.is_empty(),
            Self::Label(map) | Self::Env(map) => map.is_empty(),
            Self::Expose(ports) => ports.is_empty(),
            _ => false,
        }
    }

    /// Arguments of an exec-form instruction.
    pub fn exec_args(&self) -> Option<&ExecArgs> {
        match self {
            Self::EntryPoint(args) | Self::Cmd(args) => Some(args),
            _ => None,
        }
    }

    /// Serialized manifest text, resolving any deferred arguments.
    pub fn text(&self) -> Result<String, ResolveError> {
        let body = match self {
            Self::From { image, stage: Some(stage) } => format!("{image} AS {stage}"),
            Self::From { image, stage: None } => image.clone(),
            Self::Label(labels) => labels
                .iter()
                .map(|(k, v)| format!("{}={}", quote_if_needed(k), quote(v)))
                .collect::<Vec<_>>()
                .join(" "),
            Self::WorkDir(path) => path.clone(),
            Self::Copy { src, dest, from: Some(stage) } => format!("--from={stage} {src} {dest}"),
            Self::Copy { src, dest, from: None } => format!("{src} {dest}"),
            Self::Run(command) => command.clone(),
            Self::Env(vars) => vars
                .iter()
                .map(|(k, v)| format!("{k}={}", quote_if_needed(v)))
                .collect::<Vec<_>>()
                .join(" "),
            Self::User(user) => user.clone(),
            Self::Expose(ports) => {
                ports.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" ")
            }
            Self::EntryPoint(args) | Self::Cmd(args) => exec_form(&args.resolve()?),
            Self::Composite(members) => {
                let lines = members.iter().map(Instruction::text).collect::<Result<Vec<_>, _>>()?;
                return Ok(lines.join(LINE_SEPARATOR));
            }
        };
        Ok(format!("{} {}", self.keyword(), body))
    }
}

/// JSON array form: `["java","-jar","app.jar"]`
fn exec_form(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|a| quote(a)).collect();
    format!("[{}]", quoted.join(","))
}

/// Double-quote with JSON string escaping.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_if_needed(s: &str) -> String {
    if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\') {
        quote(s)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
