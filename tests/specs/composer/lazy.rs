// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred arguments resolve when text is produced.

use crate::prelude::*;

fn deferred_config(jar: &Property<String>) -> JavaApplicationConfig {
    let mut config = config();
    let args = jar.provider().map(|jar| vec!["java".to_string(), "-jar".to_string(), jar]);
    config.configure_exec_instructions(|exec| {
        exec.entry_point(args);
    });
    config
}

#[test]
fn value_set_after_registration_is_used() {
    let jar = Property::new("jar");
    let config = deferred_config(&jar);
    jar.set("late.jar");

    assert_eq!(
        config.exec_instruction().text().unwrap(),
        r#"ENTRYPOINT ["java","-jar","late.jar"]"#
    );
}

#[test]
fn missing_value_fails_at_text_time() {
    let jar = Property::<String>::new("jar");
    let config = deferred_config(&jar);

    assert_eq!(config.exec_instruction().text(), Err(ResolveError::unresolved("jar")));
}

#[test]
fn failure_propagates_through_render() {
    let jar = Property::<String>::new("jar");
    let config = deferred_config(&jar);

    let err = render(&config, &project()).unwrap_err();
    assert_eq!(err.to_string(), "jar has no value");
}

#[test]
fn generated_entry_point_reads_main_class_late() {
    let config = config();
    let project = Project::new("shop");
    assert!(render(&config, &project).is_err());

    project.main_class.set("com.example.Late");
    assert!(render(&config, &project).unwrap().contains(r#""com.example.Late"]"#));
}
