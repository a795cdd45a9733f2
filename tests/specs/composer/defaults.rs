// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Freshly constructed configuration.

use crate::prelude::*;
use jd_core::FakeEnvironment;

#[test]
fn fresh_config_has_documented_defaults() {
    let config = config();
    assert_eq!(config.base_image(), "openjdk:jre-alpine");
    assert_eq!(config.ports(), &[8080]);
    assert!(config.jvm_args().is_empty());
    assert_eq!(config.tag(), None);
    assert_eq!(config.maintainer(), "tester");
    assert!(config.exec_instruction().instructions().is_empty());
}

#[test]
fn maintainer_follows_injected_environment() {
    let env = FakeEnvironment::new();
    env.set("USERNAME", "win-user");
    assert_eq!(JavaApplicationConfig::new(&env).maintainer(), "win-user");
}

#[test]
fn maintainer_without_identity_is_unknown() {
    assert_eq!(JavaApplicationConfig::new(&FakeEnvironment::new()).maintainer(), "unknown");
}

#[test]
fn untouched_overrides_fall_back_to_generated_entry_point() {
    let text = render(&config(), &project()).unwrap();
    assert!(text.contains(
        r#"ENTRYPOINT ["java","-cp","/app/resources:/app/classes:/app/libs/*","com.example.Main"]"#
    ));
    assert!(!text.contains("CMD"));
}
