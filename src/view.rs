//! Read-only projection of one language's translation subtree.

use crate::error::Error;
use crate::metrics::StoreMetrics;
use crate::node::{FormatArgs, Node, Scope, Translation};
use tracing::debug;

/// A lookup handle bound to a single language.
///
/// Views are cheap, stateless borrows of the registry's data: obtaining one
/// copies nothing, and the registry remains the sole mutator. A view cannot
/// outlive its registry.
#[derive(Debug, Clone, Copy)]
pub struct LanguageView<'a> {
    code: &'a str,
    scope: &'a Scope,
    metrics: &'a StoreMetrics,
}

impl<'a> LanguageView<'a> {
    pub(crate) fn new(code: &'a str, scope: &'a Scope, metrics: &'a StoreMetrics) -> Self {
        Self {
            code,
            scope,
            metrics,
        }
    }

    /// The language code this view is bound to.
    pub fn code(&self) -> &str {
        self.code
    }

    /// Resolve a translation by path.
    ///
    /// A literal leaf is returned verbatim. A formatter leaf is invoked
    /// synchronously with `args` and its result is propagated as-is — a
    /// formatter's own failure is never wrapped.
    ///
    /// # Errors
    /// - [`Error::EmptyPath`]: `path` has no segments.
    /// - [`Error::TranslationNotFound`]: any intermediate segment is missing
    ///   or not a scope, or the final segment holds no translation.
    /// - Any error the formatter leaf itself returns.
    ///
    /// # Example
    /// ```
    /// use l18n_tree::{FormatArgs, Registry, Translation};
    /// use std::collections::HashMap;
    ///
    /// let mut registry = Registry::new(["en"]);
    /// let mut values = HashMap::new();
    /// values.insert("en".to_string(), Translation::from("home"));
    /// registry.add(&["main", "nav", "home"], values)?;
    ///
    /// let view = registry.lang("en")?;
    /// assert_eq!(view.get(&["main", "nav", "home"], &FormatArgs::new())?, "home");
    /// # Ok::<(), l18n_tree::Error>(())
    /// ```
    pub fn get(&self, path: &[&str], args: &FormatArgs) -> Result<String, Error> {
        let result = self.resolve(path, args);
        match &result {
            Ok(_) => {
                self.metrics.record_lookup_hit();
                debug!(language = self.code, path = %path.join("/"), "translation resolved");
            }
            Err(_) => self.metrics.record_lookup_miss(),
        }
        result
    }

    fn resolve(&self, path: &[&str], args: &FormatArgs) -> Result<String, Error> {
        let (leaf_key, scope_path) = path.split_last().ok_or(Error::EmptyPath)?;

        let mut scope = self.scope;
        for segment in scope_path {
            // A missing or non-scope intermediate is a plain lookup miss,
            // not a distinct structural error.
            scope = match scope.get(*segment) {
                Some(Node::Scope(inner)) => inner,
                _ => return Err(Error::TranslationNotFound(path.join("/"))),
            };
        }

        match scope.get(*leaf_key) {
            Some(Node::Leaf(Translation::Literal(text))) => Ok(text.clone()),
            Some(Node::Leaf(Translation::Formatter(format))) => format(args),
            _ => Err(Error::TranslationNotFound(path.join("/"))),
        }
    }

    /// Whether `path` resolves to a leaf for this language.
    ///
    /// Formatter leaves count as present but are not invoked.
    pub fn contains(&self, path: &[&str]) -> bool {
        let Some((leaf_key, scope_path)) = path.split_last() else {
            return false;
        };

        let mut scope = self.scope;
        for segment in scope_path {
            scope = match scope.get(*segment) {
                Some(Node::Scope(inner)) => inner,
                _ => return false,
            };
        }
        matches!(scope.get(*leaf_key), Some(Node::Leaf(_)))
    }
}
