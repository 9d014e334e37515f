//! Structural comparison and filtering of text trees.

mod diff;
mod filter;
mod selector;


pub use diff::{if_named, structurally_equivalent, structurally_equivalent_with};
pub use filter::{FilteredNode, filter};
pub use selector::{NodeFilter, named};
