use exemplar_core::GraphNode;
use indoc::indoc;

use super::Example;
use crate::Error;
use crate::test_utils::query;

fn from_json(json: &str) -> Example {
    Example::from_json(json).expect("valid example")
}

#[test]
fn bare_node() {
    let e = from_json(r#"{ "nodeTags": ["Build"] }"#);

    assert_eq!(e.node_name(), "Build");
    assert_eq!(query(&e), "/Build()");
}

#[test]
fn single_tag_string() {
    let e = from_json(r#"{ "nodeTags": "Build", "nodeName": "nightly" }"#);

    assert_eq!(e.node_name(), "nightly");
    assert_eq!(e.node_tags(), vec!["Build"]);
}

#[test]
fn properties_keep_document_order() {
    let e = from_json(indoc! {r#"
        {
            "nodeTags": ["Build"],
            "status": "failed",
            "provider": "mybuild",
            "number": 12,
            "passed": false
        }
    "#});

    insta::assert_snapshot!(query(&e), @"/Build()[@status='failed'][@provider='mybuild'][@number='12'][@passed='false']");
}

#[test]
fn nested_nodes_and_match_marker() {
    let e = from_json(indoc! {r#"
        {
            "nodeTags": ["Build"],
            "provider": "mybuild",
            "repo": { "nodeTags": ["Repo"], "$match": true, "name": "rug" }
        }
    "#});

    insta::assert_snapshot!(query(&e), @"/Build()[@provider='mybuild']/repo::Repo()[@name='rug']");
}

#[test]
fn arrays_of_nodes() {
    let e = from_json(indoc! {r#"
        {
            "nodeTags": ["PullRequest"],
            "commits": [
                { "nodeTags": ["Commit"], "message": "one" },
                { "nodeTags": ["Commit"] }
            ]
        }
    "#});

    insta::assert_snapshot!(query(&e), @"/PullRequest()[/commits::Commit()[@message='one']][/commits::Commit()]");
}

#[test]
fn custom_predicate_key() {
    let e = from_json(r#"{ "nodeTags": ["Build"], "$predicate": "[@name='amy']", "status": "ok" }"#);

    assert_eq!(query(&e), "/Build()[@status='ok'][@name='amy']");
}

#[test]
fn skipped_values() {
    let e = from_json(indoc! {r#"
        {
            "nodeTags": ["Build"],
            "status": null,
            "meta": { "untyped": true },
            "_internal": "x",
            "$other": 1,
            "labels": [null, "nightly"]
        }
    "#});

    assert_eq!(query(&e), "/Build()[@labels='nightly']");
}

#[test]
fn float_values() {
    let e = from_json(r#"{ "nodeTags": ["Build"], "coverage": 81.5 }"#);

    assert_eq!(query(&e), "/Build()[@coverage='81.5']");
}

#[test]
fn root_without_tags_is_rejected() {
    let err = Example::from_json(r#"{ "status": "failed" }"#).unwrap_err();

    insta::assert_snapshot!(err, @"invalid example: root object has no `nodeTags`");
}

#[test]
fn non_object_root_is_rejected() {
    let err = Example::from_json("[1, 2]").unwrap_err();

    insta::assert_snapshot!(err, @"invalid example: root must be an object, found an array");
}

#[test]
fn bad_tag_entries_are_rejected() {
    let err = Example::from_json(r#"{ "nodeTags": ["Build", 3] }"#).unwrap_err();

    insta::assert_snapshot!(err, @"invalid example: `nodeTags` entries must be strings, found a number");
}

#[test]
fn bad_predicate_is_rejected() {
    let err = Example::from_json(r#"{ "nodeTags": ["Build"], "$predicate": 1 }"#).unwrap_err();

    assert!(matches!(err, Error::InvalidExample(_)));
}

#[test]
fn malformed_json() {
    let err = Example::from_json("{ nodeTags").unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}
