//! Translation table for the tagged page fragments.
//!
//! Each locale has one Fluent file embedded at compile time:
//! ```text
//! i18n/
//!   en/site.ftl
//!   ar/site.ftl
//! ```
//! Values are markup (they may contain inline tags) and are rendered as
//! inner HTML.
//!
//! Lookups never fall back to another locale. A key missing from the active
//! locale leaves whatever the fragment showed before; [`PageText::sync`]
//! implements that rule.

use std::collections::{BTreeMap, HashMap};

use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::core::prefs::Locale;

const FTL_FILE: &str = "site.ftl";

/// Every translatable fragment of the site, in page order.
pub const TRANSLATABLE_KEYS: &[&str] = &[
    "brand-name",
    "nav-home",
    "nav-services",
    "nav-about",
    "nav-contact",
    "nav-catalog",
    "hero-title",
    "hero-subtitle",
    "hero-cta",
    "hero-card-title",
    "hero-card-text",
    "services-heading",
    "services-intro",
    "service-support-title",
    "service-support-text",
    "service-network-title",
    "service-network-text",
    "service-cloud-title",
    "service-cloud-text",
    "about-title",
    "about-text",
    "contact-title",
    "contact-intro",
    "form-name",
    "form-email",
    "form-subject",
    "form-message",
    "form-send",
    "catalog-individual",
    "catalog-corporate",
    "notify-sent",
    "notify-close",
    "footer-rights",
];

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no translations embedded for `{0}`")]
    MissingSource(&'static str),
    #[error("translations for `{0}` are not valid UTF-8")]
    Encoding(&'static str),
    #[error("translations for `{locale}` failed to parse ({count} error(s))")]
    Parse { locale: &'static str, count: usize },
    #[error("`{0}` is not a valid language identifier")]
    LanguageId(&'static str),
}

/// Read-only `locale -> key -> markup` mapping.
pub struct TranslationTable {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl TranslationTable {
    /// Table built from the embedded `.ftl` files.
    pub fn embedded() -> Result<Self, TranslationError> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let path = format!("{}/{FTL_FILE}", locale.as_str());
            let file = Localizations::get(&path)
                .ok_or(TranslationError::MissingSource(locale.as_str()))?;
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|_| TranslationError::Encoding(locale.as_str()))?;
            sources.push((locale, source));
        }
        Self::from_sources(sources)
    }

    /// Table built from in-memory Fluent sources. Locales without a source
    /// simply have no entries.
    pub fn from_sources<S: Into<String>>(
        sources: impl IntoIterator<Item = (Locale, S)>,
    ) -> Result<Self, TranslationError> {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                TranslationError::Parse {
                    locale: locale.as_str(),
                    count: errors.len(),
                }
            })?;
            let lang: LanguageIdentifier = locale
                .as_str()
                .parse()
                .map_err(|_| TranslationError::LanguageId(locale.as_str()))?;

            let mut bundle = FluentBundle::new(vec![lang]);
            // Markup goes straight into the DOM; bidi isolation marks would leak into it.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| TranslationError::Parse {
                    locale: locale.as_str(),
                    count: errors.len(),
                })?;
            bundles.insert(locale, bundle);
        }
        Ok(Self { bundles })
    }

    /// An empty table: every lookup misses.
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, locale = locale.as_str(), "translation formatted with errors: {errors:?}");
        }
        Some(value.into_owned())
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }
}

/// Current content of every tagged fragment on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageText {
    entries: BTreeMap<&'static str, String>,
}

impl PageText {
    /// Re-render all [`TRANSLATABLE_KEYS`] for `locale`.
    pub fn sync(&mut self, table: &TranslationTable, locale: Locale) -> usize {
        self.sync_keys(table, locale, TRANSLATABLE_KEYS)
    }

    /// Replace the content of each key the table has for `locale`. Keys the
    /// locale lacks keep their previous content. Returns how many changed.
    pub fn sync_keys(
        &mut self,
        table: &TranslationTable,
        locale: Locale,
        keys: &[&'static str],
    ) -> usize {
        let mut replaced = 0;
        for &key in keys {
            if let Some(markup) = table.lookup(locale, key) {
                self.entries.insert(key, markup);
                replaced += 1;
            }
        }
        replaced
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Markup for `key`, or an empty string if it was never rendered.
    pub fn markup(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = "greeting = Hello <b>there</b>\nfarewell = Goodbye\n";
    const AR: &str = "greeting = مرحبا\n";

    fn table() -> TranslationTable {
        TranslationTable::from_sources([(Locale::En, EN), (Locale::Ar, AR)]).unwrap()
    }

    #[test]
    fn embedded_table_loads_both_locales() {
        let table = TranslationTable::embedded().unwrap();
        assert_eq!(table.lookup(Locale::En, "nav-home").as_deref(), Some("Home"));
        assert!(table.contains(Locale::Ar, "nav-home"));
    }

    #[test]
    fn lookup_returns_markup_verbatim() {
        assert_eq!(
            table().lookup(Locale::En, "greeting").as_deref(),
            Some("Hello <b>there</b>")
        );
    }

    #[test]
    fn missing_key_has_no_cross_locale_fallback() {
        let table = table();
        assert_eq!(table.lookup(Locale::Ar, "farewell"), None);
        assert!(!table.contains(Locale::Ar, "farewell"));
    }

    #[test]
    fn sync_leaves_missing_keys_untouched() {
        let table = table();
        let keys = &["greeting", "farewell"];
        let mut text = PageText::default();

        assert_eq!(text.sync_keys(&table, Locale::En, keys), 2);
        assert_eq!(text.sync_keys(&table, Locale::Ar, keys), 1);
        assert_eq!(text.get("greeting"), Some("مرحبا"));
        assert_eq!(text.get("farewell"), Some("Goodbye"));

        text.sync_keys(&table, Locale::En, keys);
        assert_eq!(text.get("greeting"), Some("Hello <b>there</b>"));
    }

    #[test]
    fn empty_table_changes_nothing() {
        let mut text = PageText::default();
        assert_eq!(text.sync(&TranslationTable::empty(), Locale::Ar), 0);
        assert_eq!(text.markup("nav-home"), "");
    }

    #[test]
    fn malformed_source_is_rejected() {
        let result = TranslationTable::from_sources([(Locale::En, "= no key here")]);
        assert!(matches!(result, Err(TranslationError::Parse { .. })));
    }
}
