// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exec instruction overrides.

use crate::prelude::*;

#[test]
fn entry_point_override_carries_arguments_in_order() {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        exec.entry_point(["java", "-jar", "app.jar"]);
    });

    let composer = config.exec_instruction();
    assert_eq!(composer.instructions().len(), 1);
    let instruction = &composer.instructions()[0];
    assert_eq!(instruction.keyword(), "ENTRYPOINT");
    assert_eq!(
        instruction.exec_args().and_then(ExecArgs::values),
        Some(&["java".to_string(), "-jar".to_string(), "app.jar".to_string()][..])
    );
    assert_eq!(composer.text().unwrap(), r#"ENTRYPOINT ["java","-jar","app.jar"]"#);
}

#[test]
fn second_configuration_replaces_the_first() {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        exec.default_command(["--serve"]);
    });
    config.configure_exec_instructions(|exec| {
        exec.entry_point(["java", "-jar", "app.jar"]);
    });

    let instructions = config.exec_instruction().instructions();
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].keyword(), "ENTRYPOINT");
}

#[test]
fn text_preserves_registration_order() {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        exec.default_command(["b"]).entry_point(["a"]);
    });

    let expected = format!("CMD [\"b\"]{LINE_SEPARATOR}ENTRYPOINT [\"a\"]");
    assert_eq!(config.exec_instruction().text().unwrap(), expected);
}

#[yare::parameterized(
    empty         = { 0 },
    one           = { 1 },
    several       = { 4 },
)]
fn composite_keyword_is_blank(count: usize) {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        for i in 0..count {
            exec.entry_point(vec![format!("arg{i}")]);
        }
    });
    assert_eq!(config.exec_instruction().keyword(), "");
    assert_eq!(Instruction::from(config.exec_instruction()).keyword(), "");
}

#[test]
fn override_replaces_generated_entry_point_entirely() {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        exec.default_command(["--serve"]);
    });

    let text = render(&config, &project()).unwrap();
    let lines = lines(&text);
    assert_eq!(lines[lines.len() - 2], r#"CMD ["--serve"]"#);
    assert!(!text.contains("ENTRYPOINT"), "no entry point is synthesized: {text}");
}

#[test]
fn empty_entry_point_is_accepted() {
    let mut config = config();
    config.configure_exec_instructions(|exec| {
        exec.entry_point(Vec::<String>::new());
    });
    assert_eq!(config.exec_instruction().text().unwrap(), "ENTRYPOINT []");
}
