// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build files in every supported format produce the same Dockerfile.

use crate::prelude::*;

const HCL: &str = r#"
project {
  name       = "shop"
  main_class = "com.example.Main"
}
java_application {
  base_image = "eclipse-temurin:21-jre"
  ports      = [9090]
  exec {
    entry_point = ["java", "-cp", "/app/classes", "${project.main_class}"]
    cmd         = ["--serve"]
  }
}
"#;

const TOML: &str = r#"
[project]
name = "shop"
main_class = "com.example.Main"

[java_application]
base_image = "eclipse-temurin:21-jre"
ports = [9090]

[java_application.exec]
entry_point = ["java", "-cp", "/app/classes", "${project.main_class}"]
cmd = ["--serve"]
"#;

const JSON: &str = r#"{
  "project": { "name": "shop", "main_class": "com.example.Main" },
  "java_application": {
    "base_image": "eclipse-temurin:21-jre",
    "ports": [9090],
    "exec": {
      "entry_point": ["java", "-cp", "/app/classes", "${project.main_class}"],
      "cmd": ["--serve"]
    }
  }
}"#;

#[yare::parameterized(
    hcl  = { HCL,  Format::Hcl },
    toml = { TOML, Format::Toml },
    json = { JSON, Format::Json },
)]
fn renders_overrides(content: &str, format: Format) {
    let text = render_build_file(content, format).unwrap();
    similar_asserts::assert_eq!(
        lines(&text),
        vec![
            "FROM eclipse-temurin:21-jre",
            r#"LABEL maintainer="tester""#,
            "WORKDIR /app",
            "COPY libs libs/",
            "COPY resources resources/",
            "COPY classes classes/",
            r#"ENTRYPOINT ["java","-cp","/app/classes","com.example.Main"]"#,
            r#"CMD ["--serve"]"#,
            "EXPOSE 9090",
        ]
    );
}

#[test]
fn placeholder_without_value_fails_at_render() {
    let content = r#"
[project]
name = "shop"

[java_application.exec]
entry_point = ["java", "${project.main_class}"]
"#;
    let err = render_build_file(content, Format::Toml).unwrap_err();
    assert!(matches!(err, ResolveError::UnknownPlaceholder { .. }), "got {err:?}");
}

#[test]
fn load_from_disk_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("javadock.toml");
    std::fs::write(&path, TOML).unwrap();

    let (config, project) =
        jd_config::load_build_file(&path).unwrap().resolve(&tester_env()).unwrap();
    assert_eq!(config.base_image(), "eclipse-temurin:21-jre");
    assert_eq!(project.main_class.get().as_deref(), Some("com.example.Main"));
}
