//! Integration tests for the translation store.
//!
//! These tests verify the interaction between multiple modules: registry
//! insertion, per-language views, formatter leaves, validation, and metrics
//! across a complete workflow.

use l18n_tree::{Error, FormatArgs, Registry, Translation, TranslationValidator};
use proptest::prelude::*;
use serde_json::json;
use std::collections::{HashMap, HashSet};

// ==================== Test Helpers ====================

/// Build a values map of literal translations.
fn literals(pairs: &[(&str, &str)]) -> HashMap<String, Translation> {
    pairs
        .iter()
        .map(|(language, text)| ((*language).to_string(), Translation::from(*text)))
        .collect()
}

/// Gendered "applied your invitation" formatter, per language wording.
fn applied_formatter(
    woman: &'static str,
    man: &'static str,
    neutral: &'static str,
) -> Translation {
    Translation::formatter(move |args| {
        let raw = args.get("sex").ok_or(Error::MissingArgument {
            name: "sex".to_string(),
        })?;
        let sex = raw
            .as_str()
            .ok_or_else(|| Error::Formatter("\"sex\" should be a string".to_string()))?;
        Ok(match sex {
            "woman" => woman.to_string(),
            "man" => man.to_string(),
            _ => neutral.to_string(),
        })
    })
}

fn args(pairs: &[(&str, serde_json::Value)]) -> FormatArgs {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

// ==================== Full Workflow Tests ====================

#[test]
fn test_complete_workflow_literals_and_formatters() {
    let mut registry = Registry::new(["en", "ru", "ua"]);

    registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
        )
        .expect("literal insert");
    registry
        .add(
            &["main", "nav", "archive"],
            literals(&[("en", "archive"), ("ru", "архив"), ("ua", "архів")]),
        )
        .expect("sibling insert");

    let mut formatters = HashMap::new();
    formatters.insert(
        "en".to_string(),
        applied_formatter(
            "she applied your invitation",
            "he applied your invitation",
            "your invitation was applied",
        ),
    );
    formatters.insert(
        "ru".to_string(),
        applied_formatter(
            "приняла ваше приглашение",
            "принял ваше приглашение",
            "ваше приглашение было принято",
        ),
    );
    formatters.insert(
        "ua".to_string(),
        applied_formatter(
            "прийняла ваше запрошення",
            "прийняв ваше запрошення",
            "ваше запрошення було прийняте",
        ),
    );
    registry
        .add(&["main", "invitation", "applied"], formatters)
        .expect("formatter insert");

    // Literals resolve verbatim per language.
    let empty = FormatArgs::new();
    for (language, expected) in [("en", "home"), ("ru", "главная"), ("ua", "головна")] {
        let view = registry.lang(language).unwrap();
        assert_eq!(
            view.get(&["main", "nav", "home"], &empty).unwrap(),
            expected
        );
    }

    // Formatters branch on the "sex" argument, per language.
    let path = ["main", "invitation", "applied"];
    let cases = [
        ("en", "man", "he applied your invitation"),
        ("en", "woman", "she applied your invitation"),
        ("ru", "man", "принял ваше приглашение"),
        ("ru", "woman", "приняла ваше приглашение"),
        ("ua", "man", "прийняв ваше запрошення"),
        ("ua", "woman", "прийняла ваше запрошення"),
    ];
    for (language, sex, expected) in cases {
        let view = registry.lang(language).unwrap();
        let result = view.get(&path, &args(&[("sex", json!(sex))])).unwrap();
        assert_eq!(result, expected);
    }
}

#[test]
fn test_formatter_failure_propagates_to_caller() {
    let mut registry = Registry::new(["en"]);
    let mut values = HashMap::new();
    values.insert(
        "en".to_string(),
        applied_formatter("she applied", "he applied", "applied"),
    );
    registry.add(&["applied"], values).unwrap();

    let view = registry.lang("en").unwrap();
    let err = view.get(&["applied"], &FormatArgs::new()).unwrap_err();
    assert_eq!(err.to_string(), "\"sex\" is not provided");
}

// ==================== Atomic Insertion Tests ====================

#[test]
fn test_incomplete_add_then_complete_add_succeeds() {
    let mut registry = Registry::new(["en", "ru", "ua"]);

    let err = registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная")]),
        )
        .unwrap_err();
    assert_eq!(err, Error::MissingTranslation("ua".to_string()));

    // The failed call must not have inserted for en or ru.
    registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
        )
        .expect("registry should be untouched after a rejected add");

    let view = registry.lang("ua").unwrap();
    assert_eq!(
        view.get(&["main", "nav", "home"], &FormatArgs::new())
            .unwrap(),
        "головна"
    );
}

#[test]
fn test_unregistered_language_in_values_mutates_nothing() {
    let mut registry = Registry::new(["en", "ru"]);

    let err = registry
        .add(
            &["title"],
            literals(&[("en", "Title"), ("ru", "Заголовок"), ("fr", "Titre")]),
        )
        .unwrap_err();
    assert_eq!(err, Error::UnregisteredLanguage("fr".to_string()));

    registry
        .add(&["title"], literals(&[("en", "Title"), ("ru", "Заголовок")]))
        .expect("registry should be untouched after a rejected add");
}

#[test]
fn test_structural_conflicts_across_calls() {
    let mut registry = Registry::new(["en", "ru", "ua"]);
    registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
        )
        .unwrap();

    // The prefix "main/nav" is a scope now.
    let err = registry
        .add(
            &["main", "nav"],
            literals(&[("en", "navigation"), ("ru", "навигация"), ("ua", "навігація")]),
        )
        .unwrap_err();
    assert_eq!(err, Error::ScopeExistsAtLeaf("main/nav".to_string()));

    // The exact path is a leaf now.
    let err = registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
        )
        .unwrap_err();
    assert_eq!(err, Error::TranslationExists("main/nav/home".to_string()));
}

// ==================== Validation Workflow Tests ====================

#[test]
fn test_validate_before_add() {
    let values = literals(&[
        ("en", "Language: {language}"),
        ("es", "Idioma: {language}"),
    ]);
    let report = TranslationValidator::check(&values);
    assert!(report.is_clean());

    let mut registry = Registry::new(["en", "es"]);
    registry.add(&["status", "language"], values).unwrap();
}

#[test]
fn test_validation_flags_placeholder_drift() {
    let values = literals(&[
        ("en", "Delivered to {count} subscribers"),
        ("es", "Entregado a todos"),
    ]);
    let report = TranslationValidator::check(&values);
    assert!(report.has_warnings());
    // Advisory only: the registry accepts the values regardless.
    let mut registry = Registry::new(["en", "es"]);
    registry.add(&["broadcast", "success"], values).unwrap();
}

// ==================== Metrics Workflow Tests ====================

#[test]
fn test_metrics_across_workflow() {
    let mut registry = Registry::new(["en", "ru", "ua"]);
    registry
        .add(
            &["main", "nav", "home"],
            literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
        )
        .unwrap();
    let _ = registry.add(
        &["main", "nav", "home"],
        literals(&[("en", "home"), ("ru", "главная"), ("ua", "головна")]),
    );

    let view = registry.lang("en").unwrap();
    let empty = FormatArgs::new();
    let _ = view.get(&["main", "nav", "home"], &empty);
    let _ = view.get(&["main", "nav", "home"], &empty);
    let _ = view.get(&["main", "nav", "missing"], &empty);

    let report = registry.metrics().report();
    assert_eq!(report.inserts, 1);
    assert_eq!(report.insert_failures, 1);
    assert_eq!(report.lookup_hits, 2);
    assert_eq!(report.lookup_misses, 1);
    assert!((report.lookup_hit_rate - 200.0 / 3.0).abs() < 1e-9);
}

// ==================== Property Tests ====================

proptest! {
    /// For any language set, path, and complete per-language literal values,
    /// add-then-get returns exactly the inserted literal for every language.
    #[test]
    fn prop_add_then_get_roundtrip(
        languages in prop::collection::hash_set("[a-z]{2,5}", 1..5),
        path in prop::collection::vec("[a-z]{1,8}", 1..5),
    ) {
        let languages: HashSet<String> = languages;
        let mut registry = Registry::new(languages.iter().cloned());

        let values: HashMap<String, Translation> = languages
            .iter()
            .map(|language| {
                (
                    language.clone(),
                    Translation::literal(format!("text-{language}")),
                )
            })
            .collect();

        let path_refs: Vec<&str> = path.iter().map(String::as_str).collect();
        registry.add(&path_refs, values).unwrap();

        let empty = FormatArgs::new();
        for language in &languages {
            let view = registry.lang(language).unwrap();
            prop_assert_eq!(
                view.get(&path_refs, &empty).unwrap(),
                format!("text-{language}")
            );
        }
    }

    /// An add that omits one registered language never leaves a partial
    /// insert: a complete retry at the same path succeeds.
    #[test]
    fn prop_incomplete_add_never_partially_inserts(
        languages in prop::collection::hash_set("[a-z]{2,5}", 2..5),
        path in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let languages: Vec<String> = languages.into_iter().collect();
        let mut registry = Registry::new(languages.iter().cloned());
        let path_refs: Vec<&str> = path.iter().map(String::as_str).collect();

        // Omit the last language.
        let incomplete: HashMap<String, Translation> = languages
            [..languages.len() - 1]
            .iter()
            .map(|language| (language.clone(), Translation::literal("x")))
            .collect();
        prop_assert!(registry.add(&path_refs, incomplete).is_err());

        let complete: HashMap<String, Translation> = languages
            .iter()
            .map(|language| (language.clone(), Translation::literal("x")))
            .collect();
        registry.add(&path_refs, complete).unwrap();
    }
}
