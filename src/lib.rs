//! Hierarchical translation-string store.
//!
//! Callers register a fixed set of language codes, populate a tree of scoped
//! keys with per-language values (literal strings or parameterized formatter
//! functions), and resolve translations by full key path for a specific
//! language. Everything is synchronous and in-memory.
//!
//! # Architecture
//!
//! - `registry`: owns every language's tree; all mutation goes through it
//! - `view`: read-only per-language lookup handle borrowed from the registry
//! - `node`: the tagged variant tree (scope / literal / formatter)
//! - `error`: the full failure taxonomy as one enum
//! - `validator`: advisory placeholder-consistency checks for values maps
//! - `metrics`: per-registry insert/lookup counters
//!
//! # Example
//!
//! ```
//! use l18n_tree::{FormatArgs, Registry, Translation};
//! use std::collections::HashMap;
//!
//! let mut registry = Registry::new(["en", "ru", "ua"]);
//!
//! let values: HashMap<String, Translation> = [
//!     ("en", "home"),
//!     ("ru", "главная"),
//!     ("ua", "головна"),
//! ]
//! .iter()
//! .map(|(lang, text)| (lang.to_string(), Translation::from(*text)))
//! .collect();
//! registry.add(&["main", "nav", "home"], values)?;
//!
//! let view = registry.lang("en")?;
//! assert_eq!(view.get(&["main", "nav", "home"], &FormatArgs::new())?, "home");
//! # Ok::<(), l18n_tree::Error>(())
//! ```

mod error;
mod metrics;
mod node;
mod registry;
mod validator;
mod view;

pub use error::Error;
pub use metrics::{MetricsReport, StoreMetrics};
pub use node::{FormatArgs, FormatterFn, Node, Scope, Translation};
pub use registry::Registry;
pub use validator::{TranslationValidator, ValidationReport};
pub use view::LanguageView;
