//! Error taxonomy for the translation store.
//!
//! Every failure here is a local validation failure returned synchronously to
//! the caller; nothing is transient or retryable, and nothing is fatal to the
//! process.

use thiserror::Error;

/// All failures the translation store can produce.
///
/// The first group covers registry and lookup validation. The last two
/// variants (`MissingArgument`, `Formatter`) exist for formatter authors:
/// a formatter's own failure is propagated through
/// [`LanguageView::get`](crate::LanguageView::get) exactly as the formatter
/// returned it, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A language code was used that is not part of the registry's
    /// constructed language set.
    #[error("language \"{0}\" is not registered")]
    UnregisteredLanguage(String),

    /// An insertion omitted a value for a registered language.
    #[error("translation for \"{0}\" language is not provided")]
    MissingTranslation(String),

    /// An intermediate path segment already holds a translation, so the
    /// path cannot descend any further. Carries the `/`-joined prefix up to
    /// and including the conflicting segment.
    #[error("wrong scope type at \"{0}\": a translation already exists here")]
    ScopeTypeConflict(String),

    /// The final path segment already holds a scope (a namespace cannot be
    /// overwritten with a leaf). Carries the full `/`-joined path.
    #[error("wrong path \"{0}\": a scope already exists here")]
    ScopeExistsAtLeaf(String),

    /// The final path segment already holds a translation for this language.
    #[error("translation \"{0}\" already exists")]
    TranslationExists(String),

    /// Lookup failed: some intermediate segment is missing or not a scope,
    /// or the final segment holds no translation.
    #[error("translation \"{0}\" does not exist")]
    TranslationNotFound(String),

    /// A path with zero segments was supplied to `add` or `get`.
    #[error("path must contain at least one segment")]
    EmptyPath,

    /// For formatter use: a required named argument was absent.
    #[error("\"{name}\" is not provided")]
    MissingArgument { name: String },

    /// For formatter use: any other formatter-specific failure (wrong
    /// argument type, unsupported value, etc.).
    #[error("{0}")]
    Formatter(String),
}
