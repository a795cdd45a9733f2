// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::provider::Property;
use proptest::prelude::*;

fn labels(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[yare::parameterized(
    from           = { Instruction::from_image("openjdk:jre-alpine"),                    "FROM openjdk:jre-alpine" },
    from_stage     = { Instruction::From { image: "maven:3".into(), stage: Some("build".into()) }, "FROM maven:3 AS build" },
    workdir        = { Instruction::WorkDir("/app".into()),                              "WORKDIR /app" },
    copy           = { Instruction::copy("libs", "libs/"),                               "COPY libs libs/" },
    copy_from      = { Instruction::Copy { src: "/out".into(), dest: "app/".into(), from: Some("build".into()) }, "COPY --from=build /out app/" },
    run            = { Instruction::Run("apk add curl".into()),                          "RUN apk add curl" },
    user           = { Instruction::User("app".into()),                                  "USER app" },
    expose_one     = { Instruction::Expose(vec![8080]),                                  "EXPOSE 8080" },
    expose_many    = { Instruction::Expose(vec![8080, 9090, 5005]),                      "EXPOSE 8080 9090 5005" },
    label          = { Instruction::label("maintainer", "jdoe"),                         r#"LABEL maintainer="jdoe""# },
    label_escaped  = { Instruction::label("description", r#"say "hi""#),                 r#"LABEL description="say \"hi\"""# },
    label_spaced   = { Instruction::Label(labels(&[("my key", "v"), ("b", "")])),        r#"LABEL "my key"="v" b="""# },
    env            = { Instruction::Env(labels(&[("JAVA_OPTS", "-Xmx1g"), ("MODE", "a b")])), r#"ENV JAVA_OPTS=-Xmx1g MODE="a b""# },
    entry_point    = { Instruction::EntryPoint(["java", "-jar", "app.jar"].into()),      r#"ENTRYPOINT ["java","-jar","app.jar"]"# },
    entry_empty    = { Instruction::EntryPoint(ExecArgs::empty()),                       "ENTRYPOINT []" },
    cmd            = { Instruction::Cmd(vec!["--port", "80"].into()),                    r#"CMD ["--port","80"]"# },
    cmd_escaped    = { Instruction::Cmd(["echo \"$HOME\"\\n"].into()),                   r#"CMD ["echo \"$HOME\"\\n"]"# },
)]
fn instruction_text(instruction: Instruction, expected: &str) {
    assert_eq!(instruction.text().unwrap(), expected);
}

#[test]
fn keywords_match_directives() {
    assert_eq!(Instruction::EntryPoint(ExecArgs::empty()).keyword(), "ENTRYPOINT");
    assert_eq!(Instruction::Cmd(ExecArgs::empty()).keyword(), "CMD");
    assert_eq!(Instruction::Expose(vec![]).keyword(), "EXPOSE");
    assert_eq!(Instruction::Composite(vec![]).keyword(), "");
}

#[test]
fn composite_joins_members_in_order() {
    let composite = Instruction::Composite(vec![
        Instruction::EntryPoint(["java"].into()),
        Instruction::Cmd(["-version"].into()),
    ]);
    assert_eq!(
        composite.text().unwrap(),
        format!(r#"ENTRYPOINT ["java"]{LINE_SEPARATOR}CMD ["-version"]"#)
    );
}

#[test]
fn empty_composite_has_empty_text() {
    assert_eq!(Instruction::Composite(vec![]).text().unwrap(), "");
}

#[test]
fn deferred_args_resolve_at_text_time() {
    let main_class: Property<String> = Property::new("main class");
    let args = main_class.provider().map(|class| vec!["java".to_string(), class]);
    let instruction = Instruction::EntryPoint(args.into());

    main_class.set("com.example.Main");
    assert_eq!(instruction.text().unwrap(), r#"ENTRYPOINT ["java","com.example.Main"]"#);
}

#[test]
fn unresolved_member_fails_composite() {
    let missing: Provider<Vec<String>> = Provider::from_fn("entry point args", || None);
    let composite = Instruction::Composite(vec![
        Instruction::Cmd(["ok"].into()),
        Instruction::EntryPoint(missing.into()),
    ]);
    assert_eq!(composite.text().unwrap_err(), ResolveError::unresolved("entry point args"));
}

#[test]
fn exec_args_introspection() {
    let eager = Instruction::EntryPoint(["a", "b"].into());
    let args = eager.exec_args().unwrap();
    assert!(!args.is_deferred());
    assert_eq!(args.values().unwrap(), ["a".to_string(), "b".to_string()]);

    let lazy = Instruction::Cmd(Provider::of(vec!["x".to_string()]).into());
    assert!(lazy.exec_args().unwrap().is_deferred());
    assert!(lazy.exec_args().unwrap().values().is_none());

    assert!(Instruction::WorkDir("/".into()).exec_args().is_none());
}

proptest! {
    #[test]
    fn exec_form_is_a_json_array(args in proptest::collection::vec(any::<String>(), 0..6)) {
        let text = Instruction::Cmd(args.clone().into()).text().unwrap();
        let body = text.strip_prefix("CMD ").unwrap();
        let parsed: Vec<String> = serde_json::from_str(body).unwrap();
        prop_assert_eq!(parsed, args);
    }
}

#[yare::parameterized(
    empty_expose    = { Instruction::Expose(vec![]),                 true },
    empty_label     = { Instruction::Label(IndexMap::new()),         true },
    empty_env       = { Instruction::Env(IndexMap::new()),           true },
    empty_composite = { Instruction::Composite(vec![]),              true },
    port            = { Instruction::Expose(vec![80]),               false },
    empty_cmd       = { Instruction::Cmd(ExecArgs::empty()),         false },
)]
fn emptiness(instruction: Instruction, expected: bool) {
    assert_eq!(instruction.is_empty(), expected);
}
