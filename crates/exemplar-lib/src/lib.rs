//! Exemplar: path expressions from example graphs, and structural tree tools.
//!
//! # Example
//!
//! ```
//! use exemplar_lib::{Example, by_example, enrich};
//!
//! let build = enrich(Example::new("Build"))
//!     .or(|b| b.set("provider", "mybuild"), |b| b.set("status", "failed"))
//!     .expect("operands add predicates");
//!
//! let query = by_example(&build).expect("acyclic example");
//! assert_eq!(query.expression(), "/Build()[@provider='mybuild' or @status='failed']");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod example;
pub mod query;
pub mod tree;

#[cfg(test)]
pub mod test_utils;

pub use example::{Example, Property};
pub use exemplar_core::{GraphNode, PathExpression, Predicate, Step, TreeNode};
pub use query::{
    Branch, Compiler, CompilerBuilder, Enriched, by_example, compile, enrich, for_root, is_match,
    match_node,
};
pub use tree::{
    FilteredNode, NodeFilter, filter, if_named, named, structurally_equivalent,
    structurally_equivalent_with,
};

/// Errors raised while compiling example graphs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node reached itself through its own properties.
    #[error("cycle detected processing property [{property}] of `{node_type}`")]
    Cycle { property: String, node_type: String },

    /// Example graph nested deeper than the compiler's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A node without type tags has no step to address it by.
    #[error("node `{node_name}` has no type tags")]
    MissingTypeTag { node_name: String },

    #[error("combinator misuse: {0}")]
    CombinatorMisuse(&'static str),

    #[error("invalid example: {0}")]
    InvalidExample(String),

    #[error("malformed example JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
