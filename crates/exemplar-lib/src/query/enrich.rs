//! Logical combinators over example nodes.
//!
//! `Enriched` wraps a node and accumulates extra predicates. A combinator runs
//! the caller's build function on a shallow copy of the node, compiles the
//! copy, and keeps only the predicates the build added. Those are combined as
//! predicate AST, so nothing is ever spliced into rendered text.

use exemplar_core::{Field, GraphNode, Predicate};
use tracing::debug;

use super::compiler::Compiler;
use crate::{Error, Result};

/// An example node with query-composition operations.
#[derive(Clone, Debug)]
pub struct Enriched<N> {
    node: N,
    predicates: Vec<Predicate>,
    is_match: bool,
    compiler: Compiler,
}

/// Wrap `node` so combinators can be applied to it.
pub fn enrich<N: GraphNode>(node: N) -> Enriched<N> {
    Enriched::new(node)
}

/// Mark `node` as the match target of its query.
pub fn match_node<N: GraphNode>(node: N) -> Enriched<N> {
    Enriched::new(node).mark_match()
}

pub fn is_match(node: &dyn GraphNode) -> bool {
    node.is_match()
}

impl<N: GraphNode> Enriched<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            predicates: Vec::new(),
            is_match: false,
            compiler: Compiler::new(),
        }
    }

    /// Compiler used to evaluate combinator operands.
    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn into_inner(self) -> N {
        self.node
    }

    /// Populate example fields on the wrapped node.
    pub fn with(mut self, build: impl FnOnce(&mut N)) -> Self {
        build(&mut self.node);
        self
    }

    /// Append raw predicate text, brackets included.
    pub fn add_custom_predicate(self, text: impl Into<String>) -> Self {
        self.add_predicate(Predicate::custom(text))
    }

    pub fn add_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn mark_match(mut self) -> Self {
        self.is_match = true;
        self
    }
}

impl<N: GraphNode + Clone> Enriched<N> {
    /// Require that whatever `build` describes does not hold.
    ///
    /// A build that adds nothing would negate "anything", which no node
    /// satisfies; that is reported as misuse.
    pub fn not(self, build: impl FnOnce(&mut N)) -> Result<Self> {
        let added = self.added_by(build)?;
        let Some(operand) = Predicate::all(added) else {
            return Err(Error::CombinatorMisuse("not() operand adds no predicates"));
        };
        Ok(self.add_predicate(Predicate::negate(operand)))
    }

    /// Require that either build's description holds.
    pub fn or(self, left: impl FnOnce(&mut N), right: impl FnOnce(&mut N)) -> Result<Self> {
        let left = Predicate::all(self.added_by(left)?);
        let right = Predicate::all(self.added_by(right)?);
        match (left, right) {
            (Some(left), Some(right)) => Ok(self.add_predicate(Predicate::or(left, right))),
            _ => {
                debug!(node_type = ?self.node.node_tags().first(), "or() with an unconstrained side always holds");
                Ok(self)
            }
        }
    }

    /// Match whatever `build` describes if present, without requiring it.
    pub fn optional(self, build: impl FnOnce(&mut N)) -> Result<Self> {
        match Predicate::all(self.added_by(build)?) {
            Some(operand) => Ok(self.add_predicate(Predicate::optional(operand))),
            None => {
                debug!(node_type = ?self.node.node_tags().first(), "optional() operand adds no predicates");
                Ok(self)
            }
        }
    }

    /// Predicates a build adds to a shallow copy of the node, in order.
    fn added_by(&self, build: impl FnOnce(&mut N)) -> Result<Vec<Predicate>> {
        let mut copy = self.node.clone();
        build(&mut copy);

        let mut before = self.compiler.compile(&self.node)?.step.into_constraints();
        let after = self.compiler.compile(&copy)?.step.into_constraints();

        Ok(after
            .into_iter()
            .filter(|p| match before.iter().position(|b| b == p) {
                Some(i) => {
                    before.swap_remove(i);
                    false
                }
                None => true,
            })
            .collect())
    }
}

impl<N: GraphNode> GraphNode for Enriched<N> {
    fn node_name(&self) -> &str {
        self.node.node_name()
    }

    fn node_tags(&self) -> Vec<&str> {
        self.node.node_tags()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.node.fields()
    }

    fn is_match(&self) -> bool {
        self.is_match || self.node.is_match()
    }

    fn custom_predicates(&self) -> Vec<&Predicate> {
        let mut predicates = self.node.custom_predicates();
        predicates.extend(&self.predicates);
        predicates
    }
}
