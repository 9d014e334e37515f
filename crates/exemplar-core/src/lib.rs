#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Exemplar.
//!
//! Two node models:
//! - **Graph nodes** (`GraphNode`): example values with typed, ordered fields,
//!   compiled into path expressions by query-by-example.
//! - **Tree nodes** (`TreeNode`): text-derived trees with named children,
//!   compared and filtered structurally.
//!
//! The `path` module holds the path expression AST shared by the compiler and
//! its combinators. It is rendered to text only at the very end.

pub mod graph;
pub mod path;
pub mod tree;

#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod path_tests;

pub use graph::{Field, FieldValue, GraphNode, NodeId, Scalar, is_relevant_property};
pub use path::{PathExpression, Predicate, Relation, Step};
pub use tree::{
    ContainerTreeNode, TerminalNode, TreeError, TreeNode, tree_from_json, tree_from_value, tree_to_json,
};
