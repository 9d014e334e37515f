//! Compiler entry points and the recursive walk.

use exemplar_core::{
    FieldValue, GraphNode, NodeId, PathExpression, Predicate, Relation, Step,
    is_relevant_property,
};
use indexmap::IndexSet;
use tracing::{debug, trace};

use super::builder::PathBuilder;
use crate::{Error, Result};

/// Maximum nesting depth of an example graph.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Path into a subgraph, and whether it narrows the result set (match) or
/// only filters it (predicate).
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub step: Step,
    pub is_match: bool,
}

impl Branch {
    /// The rendered step, without the leading `/`.
    pub fn path(&self) -> String {
        self.step.to_string()
    }
}

/// Query-by-example compiler.
///
/// Holds configuration only; every call walks with fresh state, so one
/// compiler can be shared freely.
#[derive(Clone, Copy, Debug)]
pub struct Compiler {
    recursion_limit: u32,
}

/// Builder for `Compiler`.
#[derive(Clone, Copy, Debug)]
pub struct CompilerBuilder {
    recursion_limit: u32,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Maximum depth of nested nodes before compilation gives up.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            recursion_limit: self.recursion_limit,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        CompilerBuilder::new().build()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    /// Compile `node` into a branch: its step plus match status.
    pub fn compile(&self, node: &dyn GraphNode) -> Result<Branch> {
        let mut walk = Walk {
            limit: self.recursion_limit as usize,
            ancestors: IndexSet::new(),
        };
        walk.node(node)
    }

    /// Root-anchored path expression for the example graph at `node`.
    pub fn by_example(&self, node: &dyn GraphNode) -> Result<PathExpression> {
        let branch = self.compile(node)?;
        Ok(PathExpression::absolute(&branch.step))
    }

    /// Same as `by_example`; names the intent of querying for the root itself.
    pub fn for_root(&self, node: &dyn GraphNode) -> Result<PathExpression> {
        self.by_example(node)
    }
}

/// Compile with the default compiler.
pub fn compile(node: &dyn GraphNode) -> Result<Branch> {
    Compiler::new().compile(node)
}

/// Path expression for `node` with the default compiler.
pub fn by_example(node: &dyn GraphNode) -> Result<PathExpression> {
    Compiler::new().by_example(node)
}

/// Path expression for `node` with the default compiler, queried as the root.
pub fn for_root(node: &dyn GraphNode) -> Result<PathExpression> {
    Compiler::new().for_root(node)
}

/// State of one compile call.
struct Walk {
    limit: usize,
    /// Nodes currently being compiled, outermost first.
    ancestors: IndexSet<NodeId>,
}

impl Walk {
    fn node(&mut self, node: &dyn GraphNode) -> Result<Branch> {
        if self.ancestors.len() >= self.limit {
            return Err(Error::RecursionLimitExceeded);
        }

        let tags = node.node_tags();
        let Some(type_tag) = tags.first() else {
            return Err(Error::MissingTypeTag {
                node_name: node.node_name().to_owned(),
            });
        };
        let mut state = PathBuilder::new(type_tag, node.is_match());

        self.ancestors.insert(NodeId::of(node));
        let walked = self.fields(node, type_tag, &mut state);
        self.ancestors.pop();
        walked?;

        let custom = node.custom_predicates().into_iter().cloned();
        Ok(state.into_branch(custom))
    }

    fn fields(&mut self, node: &dyn GraphNode, type_tag: &str, state: &mut PathBuilder) -> Result<()> {
        for field in node.fields() {
            if !is_relevant_property(field.name) {
                trace!(property = field.name, "skipping internal property");
                continue;
            }
            self.value(state, type_tag, field.name, field.value)?;
        }
        Ok(())
    }

    fn value(
        &mut self,
        state: &mut PathBuilder,
        owner: &str,
        name: &str,
        value: FieldValue<'_>,
    ) -> Result<()> {
        match value {
            FieldValue::Scalar(value) => {
                state.add_simple(Predicate::Equals {
                    name: name.to_owned(),
                    value,
                });
            }
            FieldValue::List(items) => {
                for item in items {
                    self.value(state, owner, name, item)?;
                }
            }
            FieldValue::Node(nested) => {
                if self.ancestors.contains(&NodeId::of(nested)) {
                    debug!(property = name, node_type = owner, "cycle in example graph");
                    return Err(Error::Cycle {
                        property: name.to_owned(),
                        node_type: owner.to_owned(),
                    });
                }
                let branch = self.node(nested)?;
                let relation = Relation::new(name, branch.step);
                if branch.is_match {
                    state.add_match(relation);
                } else {
                    state.add_complex(Predicate::Exists(relation));
                }
            }
            FieldValue::Opaque => {
                trace!(property = name, "ignoring opaque property");
            }
        }
        Ok(())
    }
}
