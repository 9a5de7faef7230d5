//! Purpose: The recursive JSON value tree and its construction/access paths.
//! Exports: `Value`, `Scalar`, `ValueKind`, `BuildOptions`, `DEFAULT_MAX_DEPTH`.
//! Role: Core data model; every other module builds on or walks this tree.
//! Invariants: A value's variant is fixed at construction; mutation touches contents only.
//! Invariants: Construction is all-or-nothing; no partial tree escapes on failure.
//! Invariants: Object member order is insertion order; duplicate keys collapse last-wins.
use std::fmt;

use serde_json::Number;

use crate::core::error::{Error, ErrorKind};

/// Matches serde_json's own text-parsing recursion limit, so text and node
/// construction hit the same ceiling by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Clone, Copy, Debug)]
pub struct BuildOptions {
    pub max_depth: usize,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Object,
    Array,
    Scalar,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Leaf payload. Exactly one sub-kind; a scalar never holds a container.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

/// One JSON value: an ordered object, an array, or a scalar leaf.
///
/// The tree exclusively owns its children. Variant selection happens once,
/// at construction, by classifying the host parser's node shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Object(Vec<(String, Value)>),
    Array(Vec<Value>),
    Scalar(Scalar),
}

impl Value {
    /// Parse JSON text with the host parser and wrap the result.
    ///
    /// Malformed text fails with `ErrorKind::Parse`, carrying the parser's
    /// line/column diagnostic in the message and the source chain.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Self::from_text_with(text, BuildOptions::new())
    }

    pub fn from_text_with(text: &str, options: BuildOptions) -> Result<Self, Error> {
        let node: serde_json::Value = serde_json::from_str(text).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message(err.to_string())
                .with_source(err)
        })?;
        let value = Self::from_node_with(&node, options)?;
        tracing::debug!(bytes = text.len(), "built value tree from text");
        Ok(value)
    }

    /// Wrap an already-decoded host parser node as an isomorphic tree.
    pub fn from_node(node: &serde_json::Value) -> Result<Self, Error> {
        Self::from_node_with(node, BuildOptions::new())
    }

    pub fn from_node_with(node: &serde_json::Value, options: BuildOptions) -> Result<Self, Error> {
        wrap_node(node, 1, options.max_depth)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Scalar(_) => ValueKind::Scalar,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Member lookup by key. Fails with `WrongVariant` on non-objects and
    /// `NotFound` when the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value, Error> {
        let members = match self {
            Value::Object(members) => members,
            other => {
                return Err(Error::new(ErrorKind::WrongVariant)
                    .with_message(format!("expected object, found {}", other.kind()))
                    .with_key(key));
            }
        };
        members
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
            .ok_or_else(|| {
                Error::new(ErrorKind::NotFound)
                    .with_message("no such member")
                    .with_key(key)
            })
    }

    /// Element lookup by index. Fails with `WrongVariant` on non-arrays and
    /// `IndexOutOfRange` past the end.
    pub fn at(&self, index: usize) -> Result<&Value, Error> {
        let items = match self {
            Value::Array(items) => items,
            other => {
                return Err(Error::new(ErrorKind::WrongVariant)
                    .with_message(format!("expected array, found {}", other.kind()))
                    .with_index(index));
            }
        };
        items.get(index).ok_or_else(|| {
            Error::new(ErrorKind::IndexOutOfRange)
                .with_message(format!("array has {} elements", items.len()))
                .with_index(index)
        })
    }

    /// Insert or replace a member on an object. A duplicate key replaces the
    /// value in its original slot (silently-last-wins).
    ///
    /// Mutators are not safe for concurrent use without external
    /// synchronization; the tree carries no internal locking.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), Error> {
        let key = key.into();
        let members = match self {
            Value::Object(members) => members,
            other => {
                return Err(Error::new(ErrorKind::WrongVariant)
                    .with_message(format!("expected object, found {}", other.kind()))
                    .with_key(key));
            }
        };
        if let Some(slot) = members.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = value;
        } else {
            members.push((key, value));
        }
        Ok(())
    }

    /// Append an element to an array.
    pub fn push(&mut self, value: Value) -> Result<(), Error> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(Error::new(ErrorKind::WrongVariant)
                .with_message(format!("expected array, found {}", other.kind()))),
        }
    }

    /// Canonical JSON text for this tree. Never fails.
    pub fn render(&self) -> String {
        crate::core::render::render(self)
    }
}

// Depth counts container nesting only; scalar leaves add no level, so the
// ceiling lines up with the host parser's own recursion limit.
fn wrap_node(node: &serde_json::Value, depth: usize, max_depth: usize) -> Result<Value, Error> {
    match node {
        serde_json::Value::Object(map) => {
            check_depth(depth, max_depth)?;
            let mut members = Vec::with_capacity(map.len());
            for (key, child) in map {
                members.push((key.clone(), wrap_node(child, depth + 1, max_depth)?));
            }
            Ok(Value::Object(members))
        }
        serde_json::Value::Array(items) => {
            check_depth(depth, max_depth)?;
            let mut children = Vec::with_capacity(items.len());
            for child in items {
                children.push(wrap_node(child, depth + 1, max_depth)?);
            }
            Ok(Value::Array(children))
        }
        serde_json::Value::Null => Ok(Value::Scalar(Scalar::Null)),
        serde_json::Value::Bool(val) => Ok(Value::Scalar(Scalar::Bool(*val))),
        serde_json::Value::Number(num) => Ok(Value::Scalar(Scalar::Number(num.clone()))),
        serde_json::Value::String(text) => Ok(Value::Scalar(Scalar::Text(text.clone()))),
    }
}

fn check_depth(depth: usize, max_depth: usize) -> Result<(), Error> {
    if depth > max_depth {
        return Err(Error::new(ErrorKind::DepthExceeded)
            .with_message(format!("nesting exceeds maximum depth {max_depth}"))
            .with_depth(depth));
    }
    Ok(())
}
