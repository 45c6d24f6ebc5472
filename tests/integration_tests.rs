//! Integration tests for locale-kit
//!
//! These tests exercise the public API end to end: language files on disk,
//! the translator facade with handlers, the date-locale binding and the
//! process-wide convenience functions.

use locale_kit::date_locale::{ChronoDateLocale, DateLocale};
use locale_kit::i18n::{
    self, load_language_file, Language, LanguageLoader, LanguageValidator, OptionBag,
    RegistryState, ResolutionSource, TranslationTable, Translator,
};
use proptest::prelude::*;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Date locale that records every name it receives
#[derive(Default)]
struct RecordingDateLocale {
    names: Mutex<Vec<String>>,
}

impl RecordingDateLocale {
    fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

impl DateLocale for RecordingDateLocale {
    fn set_active_locale(&self, name: &str) {
        self.names.lock().unwrap().push(name.to_string());
    }
}

fn language(name: &str, json: &str) -> Language {
    let table: TranslationTable = serde_json::from_str(json).expect("valid table");
    Language::new(name, table)
}

fn bag(pairs: &[(&str, &str)]) -> OptionBag {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ==================== Lookup Tests ====================

#[test]
fn test_round_trip_lookup() {
    let translator = Translator::new();
    translator.set_active_language(Some(language("en", r#"{ "a": { "b": "hello {name}" } }"#)));

    assert_eq!(translator.translate("a.b", &bag(&[("name", "Sam")])), "hello Sam");
}

#[test]
fn test_partial_path_short_circuit() {
    let translator = Translator::new();
    translator.set_active_language(Some(language("en", r#"{ "a": { "b": "x" } }"#)));

    assert_eq!(translator.t("a.c.d"), "");
}

#[test]
fn test_placeholder_miss() {
    let translator = Translator::new();
    translator.set_active_language(Some(language("en", r#"{ "pair": "{x} and {y}" }"#)));

    assert_eq!(translator.translate("pair", &bag(&[("x", "A")])), "A and ");
}

#[test]
fn test_builtin_transfer_strings() {
    let translator = Translator::new();

    assert_eq!(
        translator.translate(
            "transfer.hasCheckedFormat",
            &bag(&[("checked", "2"), ("total", "5")])
        ),
        "2/5 checked"
    );
    assert_eq!(
        translator.translate_list("transfer.titles", &OptionBag::new()),
        vec!["List 1", "List 2"]
    );
}

// ==================== Handler Tests ====================

#[test]
fn test_handler_veto_then_fallback() {
    let translator = Translator::new();
    translator.set_active_language(Some(language("en", r#"{ "a": "val" }"#)));
    translator.register_handler(|_, _| Some(String::new()));

    assert_eq!(translator.t("a"), "val");
}

#[test]
fn test_handler_authoritative_success() {
    let translator = Translator::new();
    translator.register_handler(|_, _| Some("override".to_string()));

    assert_eq!(translator.t("anything"), "override");
}

#[test]
fn test_handler_backed_by_other_table() {
    // A host backend that only knows some keys; everything else falls through
    let backend = language("fr", r#"{ "select": { "loading": "Chargement" } }"#);
    let translator = Translator::new();
    translator.register_handler(move |path, options| {
        i18n::resolver::resolve_text(path, backend.table())
            .map(|text| i18n::interpolate(text, options))
    });

    let loading = translator.lookup("select.loading", &OptionBag::new());
    assert_eq!(loading.value, "Chargement");
    assert_eq!(loading.source, ResolutionSource::Handler);

    let no_data = translator.lookup("select.noData", &OptionBag::new());
    assert_eq!(no_data.value, "No data");
    assert_eq!(no_data.source, ResolutionSource::Table);
}

// ==================== Language Switch Tests ====================

#[test]
fn test_language_switch_updates_locale() {
    let recorder = Arc::new(RecordingDateLocale::default());
    let translator = Translator::with_date_locale(recorder.clone());
    assert_eq!(translator.state(), RegistryState::Default);

    translator.set_active_language(Some(language("fr", r#"{ "a": "oui" }"#)));
    assert_eq!(recorder.names(), vec!["fr"]);
    assert_eq!(translator.state(), RegistryState::Custom);

    translator.set_active_language(None);
    assert_eq!(recorder.names(), vec!["fr"]);
    assert_eq!(translator.active_language().name(), "fr");
    assert_eq!(translator.t("a"), "oui");
}

#[test]
fn test_language_switch_binds_chrono_locale() {
    let date_locale = Arc::new(ChronoDateLocale::new());
    let translator = Translator::with_date_locale(date_locale.clone());

    translator.set_locale(Some(language("de", "{}")));

    assert_eq!(date_locale.locale_name(), "de_DE");
}

#[test]
fn test_translators_are_independent() {
    let english = Translator::new();
    let french = Translator::new();
    french.set_active_language(Some(language("fr", r#"{ "select": { "loading": "Chargement" } }"#)));
    french.register_handler(|_, _| None);

    assert_eq!(english.t("select.loading"), "Loading");
    assert_eq!(french.t("select.loading"), "Chargement");
    assert!(!english.has_handler());
}

#[test]
fn test_shared_translator_across_threads() {
    let translator = Arc::new(Translator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            std::thread::spawn(move || translator.t("messagebox.confirm"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), "OK");
    }
    assert_eq!(translator.metrics().table_hits(), 4);
}

// ==================== Language File Tests ====================

#[test]
fn test_load_install_and_validate() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("de.json"),
        r#"{
            "name": "de",
            "el": {
                "pagination": { "total": "Gesamt {total}", "goto": "Gehe zu" }
            }
        }"#,
    )
    .expect("Failed to write language file");

    let mut loader = LanguageLoader::new(temp_dir.path());
    let german = loader.load("de").expect("language loads");

    let report = LanguageValidator::validate(&Language::builtin_default(), &german);
    assert!(report.has_errors(), "partial table should report missing keys");
    assert!(report.errors.iter().any(|e| e == "Missing key: select"));

    let translator = Translator::new();
    translator.set_active_language(Some(german));
    assert_eq!(
        translator.translate("pagination.total", &bag(&[("total", "7")])),
        "Gesamt 7"
    );
    assert_eq!(translator.t("select.loading"), "");
}

#[test]
fn test_shipped_english_file_matches_builtin() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("locales");
    let english = load_language_file("en", &dir).expect("shipped English file loads");

    assert_eq!(english, Language::builtin_default());
    assert!(LanguageValidator::validate(&Language::builtin_default(), &english).is_clean());
}

// ==================== Global Translator Tests ====================

#[test]
#[serial]
fn test_global_translate_and_switch() {
    i18n::use_language(Some(Language::builtin_default()));
    assert_eq!(i18n::t("table.sumText"), "Sum");

    i18n::set_locale(Some(language("fr", r#"{ "table": { "sumText": "Somme" } }"#)));
    assert_eq!(i18n::t("table.sumText"), "Somme");
    assert_eq!(i18n::global_date_locale().locale_name(), "fr_FR");

    i18n::use_language(None);
    assert_eq!(i18n::t("table.sumText"), "Somme");

    i18n::use_language(Some(Language::builtin_default()));
}

#[test]
#[serial]
fn test_global_handler_replacement() {
    i18n::register_handler(|_, _| Some("first".to_string()));
    i18n::register_handler(|path, _| (path == "special").then(|| "second".to_string()));

    assert_eq!(i18n::t("special"), "second");
    assert_eq!(
        i18n::translate("pagination.total", &bag(&[("total", "3")])),
        "Total 3"
    );

    i18n::global().clear_handler();
}

#[test]
fn test_global_returns_same_instance() {
    assert!(std::ptr::eq(i18n::global(), i18n::global()));
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_missing_path_is_always_empty(path in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let translator = Translator::new();
        translator.set_active_language(Some(language("empty", "{}")));
        prop_assert_eq!(translator.t(&path), "");
        prop_assert_eq!(translator.t(&path), "");
    }

    #[test]
    fn prop_malformed_path_is_always_empty(path in prop_oneof![
        Just(String::new()),
        "[a-z]{0,6}".prop_map(|s| format!(".{s}")),
        "[a-z]{0,6}".prop_map(|s| format!("{s}.")),
        ("[a-z]{1,6}", "[a-z]{1,6}").prop_map(|(a, b)| format!("{a}..{b}")),
    ]) {
        let translator = Translator::new();
        prop_assert_eq!(translator.t(&path), "");
    }
}
