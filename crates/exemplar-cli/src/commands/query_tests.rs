use exemplar_lib::Error;

use super::query::compile_example;

#[test]
fn compiles_nested_example() {
    let json = r#"{
        "nodeTags": ["Build"],
        "provider": "mybuild",
        "status": "failed",
        "repo": {"nodeTags": ["Repo"]}
    }"#;

    let expr = compile_example(json, 256).unwrap();

    insta::assert_snapshot!(expr, @"/Build()[@provider='mybuild'][@status='failed'][/repo::Repo()]");
}

#[test]
fn recursion_limit_is_applied() {
    let json = r#"{"nodeTags": ["A"], "b": {"nodeTags": ["B"], "c": {"nodeTags": ["C"]}}}"#;

    assert!(compile_example(json, 3).is_ok());
    assert!(matches!(compile_example(json, 2), Err(Error::RecursionLimitExceeded)));
}

#[test]
fn invalid_example_is_reported() {
    let err = compile_example(r#"{"provider": "mybuild"}"#, 256).unwrap_err();

    insta::assert_snapshot!(err, @"invalid example: root object has no `nodeTags`");
}
