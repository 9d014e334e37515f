//! Test fixtures: example nodes modelled on a CI/SCM domain, and tree builders.

use exemplar_core::{ContainerTreeNode, GraphNode, TerminalNode};

use crate::Example;

pub fn build() -> Example {
    Example::new("Build")
}

pub fn repo() -> Example {
    Example::new("Repo")
}

pub fn org() -> Example {
    Example::new("Org")
}

pub fn commit() -> Example {
    Example::new("Commit")
}

pub fn delta() -> Example {
    Example::new("Delta")
}

pub fn pull_request() -> Example {
    Example::new("PullRequest")
}

/// Rendered path expression for `node`, panicking on compile errors.
pub fn query(node: &dyn GraphNode) -> String {
    crate::by_example(node)
        .expect("example should compile")
        .into_string()
}

pub fn container(name: &str) -> ContainerTreeNode {
    ContainerTreeNode::new(name)
}

pub fn terminal(name: &str, value: &str) -> TerminalNode {
    TerminalNode::new(name, value)
}
