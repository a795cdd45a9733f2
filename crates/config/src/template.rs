// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template variable interpolation

use jd_core::{Environment, ExecArgs, Provider, ResolveError};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for ${variable_name} or ${namespace.variable_name}
#[allow(clippy::expect_used)]
pub static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_-]*)*)\}")
        .expect("constant regex pattern is valid")
});

// Regex pattern for ${VAR:-default} environment variable expansion
#[allow(clippy::expect_used)]
static ENV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+):-([^}]*)\}").expect("constant regex pattern is valid"));

// Either form, so one pass over the template handles both
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}|{}", ENV_PATTERN.as_str(), VAR_PATTERN.as_str()))
        .expect("constant regex pattern is valid")
});

/// Expand every placeholder of `template` in a single pass.
///
/// Substituted values are never rescanned. Returns the text and the names
/// of template variables missing from `vars`, in order of appearance.
fn expand(
    template: &str,
    vars: &HashMap<String, String>,
    env: &impl Environment,
) -> (String, Vec<String>) {
    let mut missing = Vec::new();
    let text = PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            if let (Some(var_name), Some(default_value)) = (caps.get(1), caps.get(2)) {
                return env
                    .var(var_name.as_str())
                    .unwrap_or_else(|| default_value.as_str().to_string());
            }
            let name = caps.get(3).map_or("", |m| m.as_str());
            match vars.get(name) {
                Some(val) => val.clone(),
                None => {
                    missing.push(name.to_string());
                    caps[0].to_string()
                }
            }
        })
        .to_string();
    (text, missing)
}

/// Interpolate `${name}` placeholders with values from the vars map
///
/// Also expands `${VAR:-default}` patterns from `env`. Substituted values
/// are inserted verbatim, even when they contain `${`.
///
/// Unknown template variables are left as-is.
pub fn interpolate(template: &str, vars: &HashMap<String, String>, env: &impl Environment) -> String {
    expand(template, vars, env).0
}

/// Whether `text` contains anything [`interpolate`] would replace.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(text)
}

/// Names of the `${name}` template placeholders written in `text`, in order.
///
/// `${VAR:-default}` environment references are not included.
pub fn placeholder_names(text: &str) -> Vec<String> {
    PLACEHOLDER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(3).map(|m| m.as_str().to_string()))
        .collect()
}

/// Interpolate and fail if any template placeholder of `template` is unknown.
pub fn interpolate_strict(
    template: &str,
    vars: &HashMap<String, String>,
    env: &impl Environment,
    what: &str,
) -> Result<String, ResolveError> {
    let (result, missing) = expand(template, vars, env);
    if missing.is_empty() {
        Ok(result)
    } else {
        Err(ResolveError::UnknownPlaceholder {
            what: what.to_string(),
            placeholders: missing.join(", "),
        })
    }
}

/// Exec arguments that may reference placeholders.
///
/// Arguments without placeholders stay eager. Otherwise the whole vector is
/// deferred and interpolated against `vars` when resolved.
pub fn exec_args<E>(
    what: &str,
    args: Vec<String>,
    vars: &Provider<HashMap<String, String>>,
    env: &E,
) -> ExecArgs
where
    E: Environment + 'static,
{
    if !args.iter().any(|arg| has_placeholders(arg)) {
        return ExecArgs::Values(args);
    }
    let what = what.to_string();
    let env = env.clone();
    ExecArgs::Deferred(vars.and_then(move |vars| {
        args.iter().map(|arg| interpolate_strict(arg, &vars, &env, &what)).collect()
    }))
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
