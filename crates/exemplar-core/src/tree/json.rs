//! JSON representation of text trees.
//!
//! A terminal is `{"name", "value"}`, a container is `{"name", "children"}`;
//! both accept an optional `tags` array. Unknown keys are rejected so a
//! terminal with stray `children` never loses them silently.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::{ContainerTreeNode, TerminalNode, TreeNode};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTerminal {
    name: String,
    value: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContainer {
    name: String,
    #[serde(default)]
    children: Vec<RawTreeNode>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTreeNode {
    Terminal(RawTerminal),
    Container(RawContainer),
}

impl From<RawTreeNode> for Box<dyn TreeNode> {
    fn from(raw: RawTreeNode) -> Self {
        match raw {
            RawTreeNode::Terminal(t) => Box::new(TerminalNode::new(t.name, t.value).with_tags(t.tags)),
            RawTreeNode::Container(c) => Box::new(
                ContainerTreeNode::new(c.name)
                    .with_tags(c.tags)
                    .with_children(c.children.into_iter().map(Into::into).collect()),
            ),
        }
    }
}

/// Parse a tree from JSON text.
pub fn tree_from_json(json: &str) -> Result<Box<dyn TreeNode>, serde_json::Error> {
    let raw: RawTreeNode = serde_json::from_str(json)?;
    Ok(raw.into())
}

/// Build a tree from an already parsed JSON value.
pub fn tree_from_value(value: Value) -> Result<Box<dyn TreeNode>, serde_json::Error> {
    let raw: RawTreeNode = serde_json::from_value(value)?;
    Ok(raw.into())
}

/// Render any tree, including derived views, in the same JSON shape.
pub fn tree_to_json(node: &dyn TreeNode) -> Value {
    let mut object = Map::new();
    object.insert("name".into(), json!(node.node_name()));
    if !node.node_tags().is_empty() {
        object.insert("tags".into(), json!(node.node_tags()));
    }
    if node.is_terminal() {
        object.insert("value".into(), json!(node.value()));
    } else {
        let children = node.children().into_iter().map(tree_to_json).collect();
        object.insert("children".into(), Value::Array(children));
    }
    Value::Object(object)
}
