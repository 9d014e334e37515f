//! Text tree node model.
//!
//! Terminals carry text; containers derive their value from their children,
//! so a container's value is always the in-order concatenation of its
//! children's values.

mod json;


use std::borrow::Cow;
use std::fmt;

pub use json::{tree_from_json, tree_from_value, tree_to_json};

/// Error raised by tree node operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The node is a read-only view or derives its value from its children.
    #[error("{operation} unsupported on node `{node_name}`")]
    UnsupportedOperation {
        node_name: String,
        operation: &'static str,
    },
}

impl TreeError {
    pub fn unsupported(node: &dyn TreeNode, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            node_name: node.node_name().to_owned(),
            operation,
        }
    }
}

/// A node of a text-derived tree.
pub trait TreeNode: fmt::Debug {
    fn node_name(&self) -> &str;
    fn node_tags(&self) -> &[String];
    fn value(&self) -> Cow<'_, str>;
    fn children(&self) -> Vec<&dyn TreeNode>;

    /// Whether the value is held by the node rather than derived from children.
    fn is_terminal(&self) -> bool {
        false
    }

    fn update(&mut self, value: &str) -> Result<(), TreeError>;
}

/// Leaf node holding its own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalNode {
    name: String,
    value: String,
    tags: Vec<String>,
}

impl TerminalNode {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl TreeNode for TerminalNode {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn node_tags(&self) -> &[String] {
        &self.tags
    }

    fn value(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        Vec::new()
    }

    fn is_terminal(&self) -> bool {
        true
    }

    fn update(&mut self, value: &str) -> Result<(), TreeError> {
        value.clone_into(&mut self.value);
        Ok(())
    }
}

/// Interior node whose value is derived from its children.
#[derive(Debug, Default)]
pub struct ContainerTreeNode {
    name: String,
    children: Vec<Box<dyn TreeNode>>,
    tags: Vec<String>,
}

impl ContainerTreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: impl TreeNode + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn with_children(mut self, children: Vec<Box<dyn TreeNode>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn push_child(&mut self, child: Box<dyn TreeNode>) {
        self.children.push(child);
    }
}

impl TreeNode for ContainerTreeNode {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn node_tags(&self) -> &[String] {
        &self.tags
    }

    fn value(&self) -> Cow<'_, str> {
        Cow::Owned(self.children.iter().map(|c| c.value()).collect())
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.children.iter().map(|c| c.as_ref()).collect()
    }

    fn update(&mut self, _value: &str) -> Result<(), TreeError> {
        Err(TreeError::unsupported(self, "update"))
    }
}
