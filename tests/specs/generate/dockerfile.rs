// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generated Dockerfile layout.

use crate::prelude::*;
use jd_config::image_tag;

#[test]
fn full_layout_in_order() {
    let mut config = config();
    config.set_jvm_args(vec!["-Xmx512m".to_string()]).set_ports(vec![8080, 9090]);

    let text = render(&config, &project()).unwrap();
    similar_asserts::assert_eq!(
        lines(&text),
        vec![
            "FROM openjdk:jre-alpine",
            r#"LABEL maintainer="tester""#,
            "WORKDIR /app",
            "COPY libs libs/",
            "COPY resources resources/",
            "COPY classes classes/",
            r#"ENTRYPOINT ["java","-Xmx512m","-cp","/app/resources:/app/classes:/app/libs/*","com.example.Main"]"#,
            "EXPOSE 8080 9090",
        ]
    );
    assert!(text.ends_with(LINE_SEPARATOR));
}

#[test]
fn no_ports_means_no_expose() {
    let mut config = config();
    config.set_ports(Vec::new());
    let text = render(&config, &project()).unwrap();
    assert!(!text.contains("EXPOSE"));
}

#[test]
fn empty_override_list_does_not_emit_blank_line() {
    let mut config = config();
    config.configure_exec_instructions(|_| {});
    let text = render(&config, &project()).unwrap();
    assert!(!text.contains(&format!("{LINE_SEPARATOR}{LINE_SEPARATOR}")));
    assert!(text.contains("ENTRYPOINT"));
}

#[yare::parameterized(
    name_only        = { None,           None,                "Shop", "shop:latest" },
    with_version     = { None,           Some("1.0"),         "shop", "shop:1.0" },
    unspecified      = { None,           Some("unspecified"), "shop", "shop:latest" },
    with_group       = { Some("Acme"),   Some("2.0-RC"),      "Shop", "acme/shop:2.0-rc" },
    empty_group      = { Some(""),       Some("1"),           "shop", "shop:1" },
)]
fn default_tag(group: Option<&str>, version: Option<&str>, name: &str, expected: &str) {
    let mut project = Project::new(name);
    project.group = group.map(String::from);
    project.version = version.map(String::from);
    assert_eq!(image_tag(&config(), &project), expected);
}

#[test]
fn explicit_tag_wins() {
    let mut config = config();
    config.set_tag(Some("registry.local/shop:edge".to_string()));
    assert_eq!(image_tag(&config, &project()), "registry.local/shop:edge");
}
