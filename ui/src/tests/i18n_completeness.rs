use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::core::prefs::Locale;
use crate::i18n::{TranslationTable, TRANSLATABLE_KEYS};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "site.ftl";

/// Extract message ids from a Fluent file. Any line `<id> =` outside a
/// comment counts; terms (`-id`) and attributes (`.attr`) are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn locale_keys(locale: Locale) -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("i18n")
        .join(locale.as_str())
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("missing translation file {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn locales_define_the_same_keys() {
    let en = locale_keys(Locale::En);
    let ar = locale_keys(Locale::Ar);
    assert!(!en.is_empty(), "English translations contain no keys");

    let missing_in_ar: Vec<_> = en.difference(&ar).collect();
    let missing_in_en: Vec<_> = ar.difference(&en).collect();
    assert!(
        missing_in_ar.is_empty() && missing_in_en.is_empty(),
        "Translation key sets differ.\n  missing in ar: {missing_in_ar:?}\n  missing in en: {missing_in_en:?}"
    );
}

#[test]
fn every_tagged_fragment_is_translated() {
    let table = TranslationTable::embedded().expect("embedded translations parse");
    let mut failures = Vec::new();
    for locale in Locale::ALL {
        for key in TRANSLATABLE_KEYS {
            if !table.contains(locale, key) {
                failures.push(format!("{}: {key}", locale.as_str()));
            }
        }
    }
    assert!(failures.is_empty(), "Untranslated fragments:\n  {}", failures.join("\n  "));
}

#[test]
fn tagged_keys_are_unique() {
    let unique: BTreeSet<_> = TRANSLATABLE_KEYS.iter().collect();
    assert_eq!(unique.len(), TRANSLATABLE_KEYS.len(), "duplicate entries in TRANSLATABLE_KEYS");
}

#[test]
fn no_unused_translations() {
    let tagged: BTreeSet<String> = TRANSLATABLE_KEYS.iter().map(|k| k.to_string()).collect();
    let unused: Vec<_> = locale_keys(Locale::En).difference(&tagged).cloned().collect();
    assert!(unused.is_empty(), "Translations never rendered: {unused:?}");
}
