//! Per-node accumulator for path generation.

use exemplar_core::{Predicate, Relation, Step};

use super::compiler::Branch;

/// State built up while compiling one node.
///
/// Simple predicates come first, then relation predicates, then custom
/// predicates. Match relations render last as path continuations.
pub(super) struct PathBuilder {
    type_tag: String,
    is_match: bool,
    simple: Vec<Predicate>,
    complex: Vec<Predicate>,
    matches: Vec<Relation>,
}

impl PathBuilder {
    pub(super) fn new(type_tag: &str, is_match: bool) -> Self {
        Self {
            type_tag: type_tag.to_owned(),
            is_match,
            simple: Vec::new(),
            complex: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub(super) fn add_simple(&mut self, predicate: Predicate) {
        self.simple.push(predicate);
    }

    pub(super) fn add_complex(&mut self, predicate: Predicate) {
        self.complex.push(predicate);
    }

    /// A match anywhere below turns the whole branch into a match.
    pub(super) fn add_match(&mut self, relation: Relation) {
        self.is_match = true;
        self.matches.push(relation);
    }

    pub(super) fn into_branch(self, custom: impl IntoIterator<Item = Predicate>) -> Branch {
        let mut predicates = self.simple;
        predicates.extend(self.complex);
        predicates.extend(custom);
        Branch {
            step: Step {
                type_tag: self.type_tag,
                predicates,
                matches: self.matches,
            },
            is_match: self.is_match,
        }
    }
}
