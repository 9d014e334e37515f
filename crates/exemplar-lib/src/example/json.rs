//! Example graphs written as plain JSON.
//!
//! A node is any object with a `nodeTags` array (or single string). Besides
//! its data properties it may carry:
//! - `nodeName`: defaults to the first tag
//! - `$match`: `true` marks the node as the match target
//! - `$predicate`: custom predicate text appended after structural predicates
//!
//! `null` values are absent, objects without `nodeTags` are skipped, and other
//! `_`/`$` keys are internal state.

use std::rc::Rc;

use exemplar_core::{Scalar, is_relevant_property};
use serde_json::{Map, Value};
use tracing::trace;

use super::{Example, Property};
use crate::{Error, Result};

const TAGS_KEY: &str = "nodeTags";
const NAME_KEY: &str = "nodeName";
const MATCH_KEY: &str = "$match";
const PREDICATE_KEY: &str = "$predicate";

impl Example {
    /// Parse an example graph from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Convert a parsed JSON document into an example graph.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(object) if object.contains_key(TAGS_KEY) => node_from_object(object),
            Value::Object(_) => Err(Error::InvalidExample(format!(
                "root object has no `{TAGS_KEY}`"
            ))),
            other => Err(Error::InvalidExample(format!(
                "root must be an object, found {}",
                kind(other)
            ))),
        }
    }
}

fn node_from_object(object: &Map<String, Value>) -> Result<Example> {
    let tags = match object.get(TAGS_KEY) {
        Some(Value::String(tag)) => vec![tag.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|t| match t {
                Value::String(tag) => Ok(tag.clone()),
                other => Err(Error::InvalidExample(format!(
                    "`{TAGS_KEY}` entries must be strings, found {}",
                    kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        Some(other) => {
            return Err(Error::InvalidExample(format!(
                "`{TAGS_KEY}` must be an array of strings, found {}",
                kind(other)
            )));
        }
        None => return Err(Error::InvalidExample(format!("node has no `{TAGS_KEY}`"))),
    };

    let name = match object.get(NAME_KEY) {
        Some(Value::String(name)) => name.clone(),
        _ => tags.first().cloned().unwrap_or_default(),
    };
    let mut example = Example::new(name.as_str()).with_tags(tags).with_name(name);

    for (key, value) in object {
        match key.as_str() {
            MATCH_KEY => {
                if value.as_bool() == Some(true) {
                    example = example.matched();
                }
            }
            PREDICATE_KEY => match value {
                Value::String(text) => example = example.with_custom_predicate(text.as_str()),
                other => {
                    return Err(Error::InvalidExample(format!(
                        "`{PREDICATE_KEY}` must be a string, found {}",
                        kind(other)
                    )));
                }
            },
            key if !is_relevant_property(key) => {}
            key => {
                if let Some(property) = property_from_value(value)? {
                    example.set(key, property);
                } else {
                    trace!(property = key, "skipping value without query meaning");
                }
            }
        }
    }
    Ok(example)
}

fn property_from_value(value: &Value) -> Result<Option<Property>> {
    let property = match value {
        Value::Null => None,
        Value::Bool(b) => Some(Property::Scalar(Scalar::Bool(*b))),
        Value::Number(n) => Some(Property::Scalar(match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
        })),
        Value::String(s) => Some(Property::Scalar(Scalar::String(s.clone()))),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(property) = property_from_value(item)? {
                    list.push(property);
                }
            }
            Some(Property::List(list))
        }
        Value::Object(object) if object.contains_key(TAGS_KEY) => {
            Some(Property::Node(Rc::new(node_from_object(object)?)))
        }
        Value::Object(_) => None,
    };
    Ok(property)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
