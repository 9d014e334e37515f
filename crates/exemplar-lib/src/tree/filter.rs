//! Filtered views over trees.

use std::borrow::Cow;

use exemplar_core::{TreeError, TreeNode};
use tracing::trace;

use super::selector::NodeFilter;

/// Read-only view of a tree keeping only selected descendants.
///
/// Name and tags come from the original node. A terminal keeps its value;
/// any other node's value is rebuilt from the children that survived.
#[derive(Debug)]
pub struct FilteredNode<'a> {
    delegate: &'a dyn TreeNode,
    children: Vec<FilteredNode<'a>>,
}

impl<'a> FilteredNode<'a> {
    /// The node this view was made from.
    pub fn original(&self) -> &'a dyn TreeNode {
        self.delegate
    }
}

/// Keep the descendants of `node` that `selector` holds for.
///
/// The root is always kept. A dropped node takes its whole subtree with it.
pub fn filter<'a>(node: &'a dyn TreeNode, selector: &NodeFilter) -> FilteredNode<'a> {
    let children = node
        .children()
        .into_iter()
        .filter(|child| {
            let keep = selector.keep(*child);
            if !keep {
                trace!(node = child.node_name(), parent = node.node_name(), "filtered out");
            }
            keep
        })
        .map(|child| filter(child, selector))
        .collect();
    FilteredNode {
        delegate: node,
        children,
    }
}

impl TreeNode for FilteredNode<'_> {
    fn node_name(&self) -> &str {
        self.delegate.node_name()
    }

    fn node_tags(&self) -> &[String] {
        self.delegate.node_tags()
    }

    fn value(&self) -> Cow<'_, str> {
        if self.delegate.is_terminal() {
            self.delegate.value()
        } else {
            Cow::Owned(self.children.iter().map(|c| c.value()).collect())
        }
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.children.iter().map(|c| c as &dyn TreeNode).collect()
    }

    fn is_terminal(&self) -> bool {
        self.delegate.is_terminal()
    }

    fn update(&mut self, _value: &str) -> Result<(), TreeError> {
        Err(TreeError::unsupported(&*self, "update"))
    }
}
