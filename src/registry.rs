//! Translation registry: owns every language's tree and all mutation.
//!
//! The registry is constructed once with the full language set and grows
//! append-only: entries are inserted across all registered languages
//! atomically, and existing leaves are never reassigned or deleted. Reads go
//! through [`LanguageView`] projections obtained from [`Registry::lang`].
//!
//! # Concurrency
//!
//! Once construction and insertion are complete, any number of threads may
//! read concurrently. Insertion itself is not synchronized: interleaving
//! `add` with lookups (or with other `add` calls) across threads requires
//! external synchronization such as a caller-held `RwLock`.

use crate::error::Error;
use crate::metrics::StoreMetrics;
use crate::node::{Node, Scope, Translation};
use crate::view::LanguageView;
use std::collections::HashMap;
use tracing::debug;

/// The translation store: a fixed language set, one tree per language.
#[derive(Debug)]
pub struct Registry {
    /// Language code to root scope. The key set IS the registered set.
    tree: HashMap<String, Scope>,

    /// Insert/lookup counters, shared with views handed out by `lang`.
    metrics: StoreMetrics,
}

impl Registry {
    /// Create a registry with one empty root scope per language.
    ///
    /// The language list is not validated; duplicate codes collapse
    /// naturally since languages are stored as map keys.
    ///
    /// # Example
    /// ```
    /// use l18n_tree::Registry;
    ///
    /// let registry = Registry::new(["en", "ru", "ua"]);
    /// assert_eq!(registry.languages(), vec!["en", "ru", "ua"]);
    /// ```
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tree = languages
            .into_iter()
            .map(|code| (code.into(), Scope::new()))
            .collect();
        Self {
            tree,
            metrics: StoreMetrics::new(),
        }
    }

    /// All registered language codes, sorted for stable output.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tree.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Whether a language code is part of the registered set.
    pub fn is_registered(&self, code: &str) -> bool {
        self.tree.contains_key(code)
    }

    /// This registry's insert/lookup counters.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Obtain a read-only view of one language's subtree.
    ///
    /// Side-effect-free; the view borrows the registry's data rather than
    /// copying it.
    ///
    /// # Errors
    /// [`Error::UnregisteredLanguage`] when `code` is not registered.
    pub fn lang(&self, code: &str) -> Result<LanguageView<'_>, Error> {
        match self.tree.get_key_value(code) {
            Some((code, scope)) => Ok(LanguageView::new(code, scope, &self.metrics)),
            None => Err(Error::UnregisteredLanguage(code.to_string())),
        }
    }

    /// Insert a translation at `path` for every registered language at once.
    ///
    /// Intermediate scopes are created on demand; the final segment becomes
    /// a leaf. Insertion is all-or-nothing at the language-set level: the
    /// full key set of `values` is validated against the registered set in
    /// both directions before any tree is touched, so a rejected call never
    /// leaves a partial insert behind.
    ///
    /// # Errors
    /// - [`Error::EmptyPath`]: `path` has no segments.
    /// - [`Error::MissingTranslation`]: a registered language is absent
    ///   from `values`.
    /// - [`Error::UnregisteredLanguage`]: `values` names a language outside
    ///   the registered set.
    /// - [`Error::ScopeTypeConflict`]: an intermediate segment already holds
    ///   a leaf.
    /// - [`Error::ScopeExistsAtLeaf`]: the final segment already holds a
    ///   scope.
    /// - [`Error::TranslationExists`]: the final segment already holds a
    ///   leaf.
    pub fn add(
        &mut self,
        path: &[&str],
        values: HashMap<String, Translation>,
    ) -> Result<(), Error> {
        let result = self.insert(path, values);
        match &result {
            Ok(()) => self.metrics.record_insert(),
            Err(_) => self.metrics.record_insert_failure(),
        }
        result
    }

    fn insert(&mut self, path: &[&str], values: HashMap<String, Translation>) -> Result<(), Error> {
        let (leaf_key, scope_path) = path.split_last().ok_or(Error::EmptyPath)?;

        // Both directions of the key-set check run before any mutation, so
        // a rejected call cannot leave some languages' trees updated.
        for registered in self.tree.keys() {
            if !values.contains_key(registered.as_str()) {
                return Err(Error::MissingTranslation(registered.clone()));
            }
        }
        for provided in values.keys() {
            if !self.tree.contains_key(provided) {
                return Err(Error::UnregisteredLanguage(provided.clone()));
            }
        }

        let language_count = values.len();
        for (language, translation) in values {
            let root = self
                .tree
                .get_mut(&language)
                .expect("language keys are pre-validated against the registered set");

            let mut scope: &mut Scope = root;
            for (depth, segment) in scope_path.iter().enumerate() {
                let node = scope
                    .entry((*segment).to_string())
                    .or_insert_with(|| Node::Scope(Scope::new()));
                scope = match node {
                    Node::Scope(inner) => inner,
                    Node::Leaf(_) => {
                        return Err(Error::ScopeTypeConflict(path[..=depth].join("/")))
                    }
                };
            }

            match scope.get(*leaf_key) {
                Some(Node::Scope(_)) => return Err(Error::ScopeExistsAtLeaf(path.join("/"))),
                Some(Node::Leaf(_)) => return Err(Error::TranslationExists(path.join("/"))),
                None => {
                    scope.insert((*leaf_key).to_string(), Node::Leaf(translation));
                }
            }
        }

        debug!(
            path = %path.join("/"),
            languages = language_count,
            "translation added"
        );
        Ok(())
    }
}
