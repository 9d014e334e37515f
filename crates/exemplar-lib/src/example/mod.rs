//! Generic example node.
//!
//! `Example` stands in for a typed node: a type tag plus properties kept in
//! assignment order, which is the order their predicates are emitted in.
//! Nested nodes are shared behind `Rc`, so cloning an example is shallow.

mod json;

#[cfg(test)]
mod json_tests;

use std::fmt;
use std::rc::Rc;

use exemplar_core::{Field, FieldValue, GraphNode, Predicate, Scalar};
use indexmap::IndexMap;

use crate::query::Enriched;

/// A property value of an `Example`.
#[derive(Clone)]
pub enum Property {
    Scalar(Scalar),
    Node(Rc<dyn GraphNode>),
    List(Vec<Property>),
}

impl Property {
    pub fn node(node: impl GraphNode + 'static) -> Self {
        Self::Node(Rc::new(node))
    }

    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Self::Scalar(s) => FieldValue::Scalar(s.clone()),
            Self::Node(n) => FieldValue::Node(n.as_ref()),
            Self::List(items) => FieldValue::List(items.iter().map(Self::as_field_value).collect()),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => fmt::Debug::fmt(s, f),
            Self::Node(n) => write!(f, "{}()", n.node_tags().first().unwrap_or(&"?")),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl From<Scalar> for Property {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for Property {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for Property {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<i64> for Property {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<i32> for Property {
    fn from(n: i32) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<f64> for Property {
    fn from(n: f64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<bool> for Property {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<Example> for Property {
    fn from(node: Example) -> Self {
        Self::node(node)
    }
}

impl<N: GraphNode + 'static> From<Enriched<N>> for Property {
    fn from(node: Enriched<N>) -> Self {
        Self::node(node)
    }
}

impl From<Rc<dyn GraphNode>> for Property {
    fn from(node: Rc<dyn GraphNode>) -> Self {
        Self::Node(node)
    }
}

impl<T: Into<Property>> From<Vec<T>> for Property {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// An example graph node of a given type.
#[derive(Clone, Default)]
pub struct Example {
    name: String,
    tags: Vec<String>,
    properties: IndexMap<String, Property>,
    is_match: bool,
    custom: Vec<Predicate>,
}

impl Example {
    /// A node typed and named `type_tag`.
    pub fn new(type_tag: impl Into<String>) -> Self {
        let type_tag = type_tag.into();
        Self {
            name: type_tag.clone(),
            tags: vec![type_tag],
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the type tags. The first one addresses the node.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Property>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property. Re-assigning keeps the property's original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Property>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Append to a list property, creating it on first use.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Property>) {
        let value = value.into();
        match self.properties.entry(key.into()) {
            indexmap::map::Entry::Occupied(mut e) => match e.get_mut() {
                Property::List(items) => items.push(value),
                existing => {
                    let first = std::mem::replace(existing, Property::List(Vec::new()));
                    *existing = Property::List(vec![first, value]);
                }
            },
            indexmap::map::Entry::Vacant(e) => {
                e.insert(Property::List(vec![value]));
            }
        }
    }

    pub fn adding(mut self, key: impl Into<String>, value: impl Into<Property>) -> Self {
        self.add(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Property> {
        self.properties.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Mark as the match target of the query.
    pub fn matched(mut self) -> Self {
        self.is_match = true;
        self
    }

    pub fn with_custom_predicate(mut self, text: impl Into<String>) -> Self {
        self.custom.push(Predicate::custom(text));
        self
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("properties", &self.properties)
            .field("is_match", &self.is_match)
            .field("custom", &self.custom)
            .finish()
    }
}

impl GraphNode for Example {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn node_tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.properties
            .iter()
            .map(|(key, value)| Field::new(key, value.as_field_value()))
            .collect()
    }

    fn is_match(&self) -> bool {
        self.is_match
    }

    fn custom_predicates(&self) -> Vec<&Predicate> {
        self.custom.iter().collect()
    }
}
