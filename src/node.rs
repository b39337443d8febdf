//! The translation tree's node types.
//!
//! The tree is an explicit sum type: a [`Node`] is either a nested [`Scope`]
//! or a leaf [`Translation`], and a translation is either a literal string or
//! an opaque formatter. A position in the tree can never hold anything else,
//! so lookups have no runtime type-assertion failure paths.

use crate::error::Error;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Named arguments passed to formatter leaves during lookup.
///
/// Values are arbitrary; `serde_json::Value` carries strings, numbers,
/// booleans, and structured data without the store caring which.
pub type FormatArgs = HashMap<String, Value>;

/// Signature of a formatter leaf.
///
/// Formatters are supplied by the caller and treated opaquely: the store
/// invokes them synchronously during lookup and propagates their `Result`
/// unchanged. Formatter-specific failures should use
/// [`Error::MissingArgument`] or [`Error::Formatter`].
pub type FormatterFn = dyn Fn(&FormatArgs) -> Result<String, Error> + Send + Sync;

/// An intermediate namespace: path segment to child node.
pub type Scope = HashMap<String, Node>;

/// A leaf translation value.
pub enum Translation {
    /// A fixed string returned verbatim by lookup.
    Literal(String),
    /// A parameterized translation computed from named arguments at lookup
    /// time (e.g. gendered phrasing).
    Formatter(Box<FormatterFn>),
}

impl Translation {
    /// Create a literal translation.
    pub fn literal(text: impl Into<String>) -> Self {
        Translation::Literal(text.into())
    }

    /// Create a formatter translation from a closure.
    ///
    /// # Example
    /// ```
    /// use l18n_tree::{Error, Translation};
    ///
    /// let t = Translation::formatter(|args| {
    ///     match args.get("name").and_then(|v| v.as_str()) {
    ///         Some(name) => Ok(format!("hello, {name}")),
    ///         None => Err(Error::MissingArgument { name: "name".to_string() }),
    ///     }
    /// });
    /// ```
    pub fn formatter<F>(format: F) -> Self
    where
        F: Fn(&FormatArgs) -> Result<String, Error> + Send + Sync + 'static,
    {
        Translation::Formatter(Box::new(format))
    }

    /// Whether this is a literal (as opposed to a formatter).
    pub fn is_literal(&self) -> bool {
        matches!(self, Translation::Literal(_))
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Translation::Literal(text.to_string())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Translation::Literal(text)
    }
}

// Manual Debug: boxed closures have no Debug of their own.
impl fmt::Debug for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Translation::Formatter(_) => f.write_str("Formatter(..)"),
        }
    }
}

/// One position in a language's translation tree: either a nested namespace
/// or a leaf translation. A given path denotes at most one of the two.
#[derive(Debug)]
pub enum Node {
    Scope(Scope),
    Leaf(Translation),
}

impl Node {
    /// Whether this node is a scope (namespace).
    pub fn is_scope(&self) -> bool {
        matches!(self, Node::Scope(_))
    }
}
