//! Node selectors for tree filtering.

use std::fmt;
use std::rc::Rc;

use exemplar_core::TreeNode;
use indexmap::IndexSet;

/// Decides which nodes survive a [`filter`](super::filter).
#[derive(Clone)]
pub struct NodeFilter {
    select: Rc<dyn Fn(&dyn TreeNode) -> bool>,
    description: String,
}

impl NodeFilter {
    pub fn new(description: impl Into<String>, select: impl Fn(&dyn TreeNode) -> bool + 'static) -> Self {
        Self {
            select: Rc::new(select),
            description: description.into(),
        }
    }

    /// Keeps every node.
    pub fn keep_all() -> Self {
        Self::new("all", |_: &dyn TreeNode| true)
    }

    pub fn keep(&self, node: &dyn TreeNode) -> bool {
        (self.select)(node)
    }

    pub fn and(self, other: NodeFilter) -> Self {
        let description = format!("({} and {})", self.description, other.description);
        Self::new(description, move |n: &dyn TreeNode| self.keep(n) && other.keep(n))
    }

    pub fn or(self, other: NodeFilter) -> Self {
        let description = format!("({} or {})", self.description, other.description);
        Self::new(description, move |n: &dyn TreeNode| self.keep(n) || other.keep(n))
    }
}

impl fmt::Debug for NodeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeFilter({})", self.description)
    }
}

/// Keeps nodes whose name is one of `names`.
pub fn named<I, S>(names: I) -> NodeFilter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: IndexSet<String> = names.into_iter().map(Into::into).collect();
    let description = format!(
        "named [{}]",
        names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    );
    NodeFilter::new(description, move |n: &dyn TreeNode| names.contains(n.node_name()))
}
