//! Path expression AST and its text rendering.
//!
//! Grammar of the rendered form:
//!
//! ```text
//! PathExpr   := "/" Step ("/" Step)*
//! Step       := TypeTag "(" ")" Predicate*
//! Predicate  := "[" PredBody "]" | "?"
//! PredBody   := "@" Name "='" Value "'"
//!             | "not " PredBody
//!             | PredBody " or " PredBody
//!             | "/" Name "::" Step
//! ```
//!
//! On a step a conjunction renders as one bracketed predicate per operand.
//! Nested under `not` or `or` it renders as `(PredBody " and " PredBody)`,
//! and so does custom text holding several bracketed predicates.

use std::fmt::{self, Write};

use crate::graph::Scalar;

/// One typed step: `Tag()[pred]*` followed by its match continuations.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub type_tag: String,
    pub predicates: Vec<Predicate>,
    /// Relations narrowing the result set, rendered unbracketed after predicates.
    pub matches: Vec<Relation>,
}

impl Step {
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            predicates: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn with_match(mut self, relation: Relation) -> Self {
        self.matches.push(relation);
        self
    }

    /// Every constraint this step places on its node, match steps turned into
    /// existence predicates.
    pub fn into_constraints(self) -> Vec<Predicate> {
        let mut constraints = self.predicates;
        constraints.extend(self.matches.into_iter().map(Predicate::Exists));
        constraints
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.type_tag)?;
        for predicate in &self.predicates {
            write!(f, "{predicate}")?;
        }
        for relation in &self.matches {
            write!(f, "/{relation}")?;
        }
        Ok(())
    }
}

/// A navigation along a named relation: `name::Step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation {
    pub name: String,
    pub step: Step,
}

impl Relation {
    pub fn new(name: impl Into<String>, step: Step) -> Self {
        Self {
            name: name.into(),
            step,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.name, self.step)
    }
}

/// A filter condition attached to a step.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// `@name='value'`
    Equals { name: String, value: Scalar },
    /// `/name::Step`, satisfied when the relation leads somewhere.
    Exists(Relation),
    Not(Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    And(Vec<Predicate>),
    /// Rendered as its operand followed by `?`.
    Optional(Box<Predicate>),
    /// Raw predicate text, brackets included, emitted verbatim on a step.
    Custom(String),
}

/// How a predicate body binds when nested in another one.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Atom,
    Or,
    And,
    /// Custom text of unknown structure.
    Compound,
}

impl Predicate {
    pub fn equals(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::Equals {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn exists(name: impl Into<String>, step: Step) -> Self {
        Self::Exists(Relation::new(name, step))
    }

    pub fn negate(operand: Predicate) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn or(left: Predicate, right: Predicate) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn optional(operand: Predicate) -> Self {
        Self::Optional(Box::new(operand))
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self::Custom(text.into())
    }

    /// Conjunction of `operands`; a single operand stands for itself.
    ///
    /// Returns `None` when there is nothing to conjoin.
    pub fn all(mut operands: Vec<Predicate>) -> Option<Self> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Self::And(operands)),
        }
    }

    fn write_body(&self, w: &mut impl Write) -> fmt::Result {
        match self {
            Self::Equals { name, value } => {
                write!(w, "@{name}='")?;
                write_escaped(w, &value.to_string())?;
                w.write_char('\'')
            }
            Self::Exists(relation) => write!(w, "/{relation}"),
            Self::Not(operand) => {
                w.write_str("not ")?;
                operand.write_operand(w, |shape| shape != Shape::Atom)
            }
            Self::Or(left, right) => {
                let needs_parens = |shape: Shape| matches!(shape, Shape::And | Shape::Compound);
                left.write_operand(w, needs_parens)?;
                w.write_str(" or ")?;
                right.write_operand(w, needs_parens)
            }
            Self::And(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        w.write_str(" and ")?;
                    }
                    operand.write_operand(w, |shape| matches!(shape, Shape::Or | Shape::Compound))?;
                }
                Ok(())
            }
            // Optionality only means something on a step; nested, it is the operand itself.
            Self::Optional(operand) => operand.write_body(w),
            Self::Custom(text) => match custom_bodies(text).as_slice() {
                [body] => w.write_str(body),
                bodies => {
                    for (i, body) in bodies.iter().enumerate() {
                        if i > 0 {
                            w.write_str(" and ")?;
                        }
                        if body_shape(body) == Shape::Atom {
                            w.write_str(body)?;
                        } else {
                            write!(w, "({body})")?;
                        }
                    }
                    Ok(())
                }
            },
        }
    }

    fn write_operand(&self, w: &mut impl Write, needs_parens: impl Fn(Shape) -> bool) -> fmt::Result {
        if needs_parens(self.shape()) {
            w.write_char('(')?;
            self.write_body(w)?;
            w.write_char(')')
        } else {
            self.write_body(w)
        }
    }

    fn shape(&self) -> Shape {
        match self {
            Self::Equals { .. } | Self::Exists(_) | Self::Not(_) => Shape::Atom,
            Self::Or(..) => Shape::Or,
            Self::And(_) => Shape::And,
            Self::Optional(operand) => operand.shape(),
            Self::Custom(text) => match custom_bodies(text).as_slice() {
                [body] => body_shape(body),
                _ => Shape::And,
            },
        }
    }

    /// The operand of an optional, however deeply wrapped.
    fn strip_optional(&self) -> &Self {
        match self {
            Self::Optional(operand) => operand.strip_optional(),
            _ => self,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(text) => f.write_str(text),
            Self::And(operands) => operands.iter().try_for_each(|operand| write!(f, "{operand}")),
            Self::Optional(operand) => write!(f, "{}?", operand.strip_optional()),
            _ => {
                f.write_char('[')?;
                self.write_body(f)?;
                f.write_char(']')
            }
        }
    }
}

fn write_escaped(w: &mut impl Write, value: &str) -> fmt::Result {
    for c in value.chars() {
        if matches!(c, '\'' | '\\') {
            w.write_char('\\')?;
        }
        w.write_char(c)?;
    }
    Ok(())
}

/// Bodies of the bracketed predicates `[a][b]` that make up `text`.
///
/// Text that is not such a sequence is a single body of its own.
fn custom_bodies(text: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut quotes = Quotes::default();
    for (i, c) in text.char_indices() {
        if quotes.feed(c) {
            if depth == 0 {
                return vec![text];
            }
            continue;
        }
        match c {
            '[' => {
                if depth == 0 {
                    start = i + 1;
                }
                depth += 1;
            }
            ']' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    bodies.push(&text[start..i]);
                }
            }
            c if depth == 0 && !c.is_whitespace() => return vec![text],
            _ => {}
        }
    }
    if depth > 0 || quotes.open || bodies.is_empty() {
        return vec![text];
    }
    bodies
}

/// A body is atomic when it has no whitespace outside quoted values.
fn body_shape(body: &str) -> Shape {
    let mut quotes = Quotes::default();
    let spaced = body
        .chars()
        .any(|c| !quotes.feed(c) && c.is_whitespace());
    if spaced { Shape::Compound } else { Shape::Atom }
}

/// Tracks `'...'` values with backslash escapes while scanning predicate text.
#[derive(Default)]
struct Quotes {
    open: bool,
    escaped: bool,
}

impl Quotes {
    /// Feeds one character; true when it belongs to a quoted value,
    /// delimiters included.
    fn feed(&mut self, c: char) -> bool {
        if self.open {
            match c {
                _ if self.escaped => self.escaped = false,
                '\\' => self.escaped = true,
                '\'' => self.open = false,
                _ => {}
            }
            true
        } else if c == '\'' {
            self.open = true;
            true
        } else {
            false
        }
    }
}

/// A rendered, root-anchored path expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PathExpression {
    expression: String,
}

impl PathExpression {
    /// Anchor `step` at the root of the graph.
    pub fn absolute(step: &Step) -> Self {
        Self {
            expression: format!("/{step}"),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn into_string(self) -> String {
        self.expression
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl AsRef<str> for PathExpression {
    fn as_ref(&self) -> &str {
        &self.expression
    }
}
