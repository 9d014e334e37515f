//! Graph node model for query-by-example.
//!
//! An example graph is any set of values implementing [`GraphNode`]. Each node
//! declares its queryable fields explicitly, in a stable order, instead of
//! having them discovered by reflection.

use std::fmt;

use crate::path::Predicate;

/// Keys naming a node's own structure rather than its data.
pub const STRUCTURAL_PROPERTIES: &[&str] = &["nodeName", "nodeTags", "address", "constructor"];

/// Key prefixes reserved for internal state (match markers, predicate accumulators).
pub const INTERNAL_PREFIXES: &[char] = &['_', '$'];

/// Whether a property key takes part in query generation.
///
/// Structural keys and keys carrying internal state never produce predicates.
pub fn is_relevant_property(key: &str) -> bool {
    !key.is_empty()
        && !STRUCTURAL_PROPERTIES.contains(&key)
        && !key.starts_with(INTERNAL_PREFIXES)
}

/// A node in an example graph.
pub trait GraphNode {
    fn node_name(&self) -> &str;

    /// Type markers, most specific first. The first tag addresses the node's step.
    fn node_tags(&self) -> Vec<&str>;

    /// Queryable fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Whether this node is the target of the query rather than a filter on it.
    fn is_match(&self) -> bool {
        false
    }

    /// Predicates attached by enrichment, rendered after structural ones.
    fn custom_predicates(&self) -> Vec<&Predicate> {
        Vec::new()
    }
}

impl<T: GraphNode + ?Sized> GraphNode for &T {
    fn node_name(&self) -> &str {
        (*self).node_name()
    }
    fn node_tags(&self) -> Vec<&str> {
        (*self).node_tags()
    }
    fn fields(&self) -> Vec<Field<'_>> {
        (*self).fields()
    }
    fn is_match(&self) -> bool {
        (*self).is_match()
    }
    fn custom_predicates(&self) -> Vec<&Predicate> {
        (*self).custom_predicates()
    }
}

impl<T: GraphNode + ?Sized> GraphNode for std::rc::Rc<T> {
    fn node_name(&self) -> &str {
        (**self).node_name()
    }
    fn node_tags(&self) -> Vec<&str> {
        (**self).node_tags()
    }
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
    fn is_match(&self) -> bool {
        (**self).is_match()
    }
    fn custom_predicates(&self) -> Vec<&Predicate> {
        (**self).custom_predicates()
    }
}

/// Identity of a graph node: the address and size of the value behind the
/// reference.
///
/// A node embedded by value at the start of its parent shares the parent's
/// address but not its size. Zero-sized nodes may share an address; they
/// carry no fields and so can never take part in a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    addr: usize,
    size: usize,
}

impl NodeId {
    pub fn of(node: &dyn GraphNode) -> Self {
        Self {
            addr: std::ptr::from_ref(node).cast::<()>() as usize,
            size: std::mem::size_of_val(node),
        }
    }
}

/// A named, queryable field of a graph node.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self { name, value }
    }

    pub fn scalar(name: &'a str, value: impl Into<Scalar>) -> Self {
        Self::new(name, FieldValue::Scalar(value.into()))
    }

    pub fn node(name: &'a str, node: &'a dyn GraphNode) -> Self {
        Self::new(name, FieldValue::Node(node))
    }

    pub fn list(name: &'a str, values: Vec<FieldValue<'a>>) -> Self {
        Self::new(name, FieldValue::List(values))
    }
}

/// Value of a field, classified for compilation.
pub enum FieldValue<'a> {
    Scalar(Scalar),
    Node(&'a dyn GraphNode),
    /// Each element is treated as if it were the field's value.
    List(Vec<FieldValue<'a>>),
    /// Functions and unrecognised shapes. Ignored by the compiler.
    Opaque,
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::Node(n) => f
                .debug_struct("Node")
                .field("name", &n.node_name())
                .field("tags", &n.node_tags())
                .finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Opaque => f.write_str("Opaque"),
        }
    }
}

/// A primitive property value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
