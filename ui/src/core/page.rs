//! Global page controller: theme and locale modes plus the navbar helpers.
//!
//! One instance lives for a page view. It reads the persisted modes once at
//! construction and writes them back only from the two toggles.

use crate::i18n::{PageText, TranslationTable};

use super::platform;
use super::prefs::{DisplayMode, Locale, LANGUAGE_KEY, THEME_KEY};
use super::storage::KeyValueStore;

/// Navbar class applied once the page is scrolled past the threshold.
pub const NAVBAR_SCROLLED_CLASS: &str = "navbar-scrolled";

#[derive(Debug, Clone, PartialEq)]
pub struct PageController {
    mode: DisplayMode,
    locale: Locale,
    text: PageText,
}

impl PageController {
    /// Load persisted modes (unknown values fall back to light/en) and render
    /// both onto the document.
    pub fn initialize(store: &dyn KeyValueStore, table: &TranslationTable) -> Self {
        let mut page = Self {
            mode: DisplayMode::load(store),
            locale: Locale::load(store),
            text: PageText::default(),
        };
        page.text.sync(table, page.locale);
        page.apply_document();
        tracing::debug!(
            mode = page.mode.as_str(),
            locale = page.locale.as_str(),
            "page controller initialized"
        );
        page
    }

    pub fn toggle_display_mode(&mut self, store: &dyn KeyValueStore) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.apply_document();
        persist(store, THEME_KEY, self.mode.as_str());
        self.mode
    }

    pub fn toggle_locale(&mut self, store: &dyn KeyValueStore, table: &TranslationTable) -> Locale {
        self.locale = self.locale.toggled();
        persist(store, LANGUAGE_KEY, self.locale.as_str());
        self.apply_document();
        let replaced = self.text.sync(table, self.locale);
        tracing::debug!(locale = self.locale.as_str(), replaced, "locale switched");
        self.locale
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self) -> &PageText {
        &self.text
    }

    /// Shorthand for `self.text().markup(key)`.
    pub fn markup(&self, key: &str) -> String {
        self.text.markup(key)
    }

    fn apply_document(&self) {
        platform::apply_document_modes(self.mode, self.locale);
    }
}

fn persist(store: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        tracing::warn!(key, "could not persist preference: {err}");
    }
}

/// Whether the navbar should carry [`NAVBAR_SCROLLED_CLASS`].
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Smooth-scroll to the target of a same-page link. Returns `false` (and
/// does nothing) when the link has no fragment or the target is absent.
pub fn navigate_to_fragment(href: &str) -> bool {
    platform::fragment_of(href).is_some_and(platform::scroll_to_fragment)
}

/// Link target for a section anchor. On the page that holds the sections the
/// bare fragment is used; from any other page (`home_path` set) the link
/// leads to that page with the fragment attached.
pub fn section_href(anchor: &str, home_path: Option<&str>) -> String {
    match (home_path, platform::fragment_of(anchor)) {
        (Some(home), Some(fragment)) => format!("{}#{fragment}", home.trim_end_matches('#')),
        _ => anchor.to_string(),
    }
}
