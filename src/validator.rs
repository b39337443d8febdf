//! Translation quality validation.
//!
//! Literal translations commonly carry `{name}` placeholders that the caller
//! substitutes after lookup. When one `add` call supplies literals for
//! several languages, a placeholder present in one language but absent from
//! another is almost always an authoring mistake. The checks here are purely
//! advisory: [`Registry::add`](crate::Registry::add) never consults them,
//! callers opt in before (or after) inserting.

use crate::node::Translation;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a values map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (e.g. an empty translation).
    pub errors: Vec<String>,

    /// Non-critical problems (e.g. placeholder mismatches).
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings).
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for per-language translation value maps.
pub struct TranslationValidator;

// Placeholder pattern, cached for reuse across calls.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check a values map of the kind passed to `add`.
    ///
    /// Literal values are checked for emptiness (error) and for placeholder
    /// consistency across languages (warning). Formatter values are opaque
    /// and skipped.
    pub fn check(values: &HashMap<String, Translation>) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Sorted for deterministic report ordering.
        let mut literals: Vec<(&str, &str)> = values
            .iter()
            .filter_map(|(language, translation)| match translation {
                Translation::Literal(text) => Some((language.as_str(), text.as_str())),
                Translation::Formatter(_) => None,
            })
            .collect();
        literals.sort_unstable_by_key(|(language, _)| *language);

        for (language, text) in &literals {
            if text.trim().is_empty() {
                report
                    .errors
                    .push(format!("Empty translation for language \"{language}\""));
            }
        }

        let placeholder_sets: Vec<(&str, BTreeSet<String>)> = literals
            .iter()
            .map(|(language, text)| (*language, Self::extract_placeholders(text)))
            .collect();

        if let Some((first_language, first_set)) = placeholder_sets.first() {
            for (language, set) in &placeholder_sets[1..] {
                if set != first_set {
                    report.warnings.push(format!(
                        "Placeholder mismatch: \"{}\" has {:?}, \"{}\" has {:?}",
                        first_language, first_set, language, set
                    ));
                }
            }
        }

        report
    }

    /// Extract all `{name}` placeholders from text.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .map(|capture| capture[1].to_string())
            .collect()
    }
}
