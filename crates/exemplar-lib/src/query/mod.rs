//! Query-by-example compilation.
//!
//! Walks an example graph and turns every populated field into a predicate:
//! - scalars become equality predicates `[@name='value']`
//! - nested nodes become relation predicates `[/name::Type()]`, or relation
//!   steps `/name::Type()` when the nested node is a match target
//! - lists contribute each element under the same field name
//!
//! `Enriched` adds logical combinators on top of the same compiler.

mod builder;
mod compiler;
mod enrich;


pub use compiler::{
    Branch, Compiler, CompilerBuilder, DEFAULT_RECURSION_LIMIT, by_example, compile, for_root,
};
pub use enrich::{Enriched, enrich, is_match, match_node};
