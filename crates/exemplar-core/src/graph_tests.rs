use crate::graph::{Field, FieldValue, GraphNode, NodeId, Scalar, is_relevant_property};

struct Label;

impl GraphNode for Label {
    fn node_name(&self) -> &str {
        "Label"
    }

    fn node_tags(&self) -> Vec<&str> {
        vec!["Label", "-dynamic"]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::scalar("name", "bug")]
    }
}

struct Issue {
    title: String,
    label: Label,
}

impl GraphNode for Issue {
    fn node_name(&self) -> &str {
        "Issue"
    }

    fn node_tags(&self) -> Vec<&str> {
        vec!["Issue"]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("title", self.title.as_str()),
            Field::node("label", &self.label),
        ]
    }
}

#[repr(C)]
struct Triaged {
    issue: Issue,
    priority: u32,
}

impl GraphNode for Triaged {
    fn node_name(&self) -> &str {
        "Triaged"
    }

    fn node_tags(&self) -> Vec<&str> {
        vec!["Triaged"]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::node("issue", &self.issue),
            Field::scalar("priority", i64::from(self.priority)),
        ]
    }
}

#[test]
fn structural_properties_are_not_relevant() {
    assert!(!is_relevant_property("nodeName"));
    assert!(!is_relevant_property("nodeTags"));
    assert!(!is_relevant_property("address"));
    assert!(!is_relevant_property("constructor"));
}

#[test]
fn internal_state_prefixes_are_not_relevant() {
    assert!(!is_relevant_property("_match"));
    assert!(!is_relevant_property("$predicate"));
    assert!(!is_relevant_property(""));
}

#[test]
fn data_properties_are_relevant() {
    assert!(is_relevant_property("status"));
    assert!(is_relevant_property("compareUrl"));
    assert!(is_relevant_property("name_"));
}

#[test]
fn blanket_impls_delegate() {
    let issue = Issue {
        title: "crash".into(),
        label: Label,
    };
    let by_ref = &issue;
    let shared = std::rc::Rc::new(Label);

    assert_eq!(by_ref.node_tags(), vec!["Issue"]);
    assert_eq!(by_ref.fields().len(), 2);
    assert_eq!(shared.node_name(), "Label");
    assert!(!shared.is_match());
    assert!(shared.custom_predicates().is_empty());
}

#[test]
fn node_id_follows_identity() {
    let a = Issue {
        title: "a".into(),
        label: Label,
    };
    let b = Issue {
        title: "a".into(),
        label: Label,
    };

    assert_eq!(NodeId::of(&a), NodeId::of(&a));
    assert_ne!(NodeId::of(&a), NodeId::of(&b));
}

#[test]
fn node_id_tells_embedded_node_from_its_parent() {
    let t = Triaged {
        issue: Issue {
            title: "crash".into(),
            label: Label,
        },
        priority: 1,
    };

    assert!(std::ptr::addr_eq(&t, &t.issue));
    assert_ne!(NodeId::of(&t), NodeId::of(&t.issue));
    assert_eq!(NodeId::of(&t.issue), NodeId::of(&t.issue));
}

#[test]
fn field_value_debug_names_nested_node() {
    let issue = Issue {
        title: "crash".into(),
        label: Label,
    };
    let fields = issue.fields();

    assert!(matches!(&fields[0].value, FieldValue::Scalar(Scalar::String(s)) if s == "crash"));
    insta::assert_snapshot!(format!("{:?}", fields[1].value), @r#"Node { name: "Label", tags: ["Label", "-dynamic"] }"#);
}

#[test]
fn scalar_display_is_bare_value() {
    assert_eq!(Scalar::from("failed").to_string(), "failed");
    assert_eq!(Scalar::from(42).to_string(), "42");
    assert_eq!(Scalar::from(1.5).to_string(), "1.5");
    assert_eq!(Scalar::from(true).to_string(), "true");
}
