//! Full page-view scenario: fresh load, both toggles, a contact submission
//! and the notification lifecycle, driven without a DOM. The timer-driven
//! paths inside a running page live in `site_lifetime`.

use time::Duration;

use crate::core::config::SiteConfig;
use crate::core::contact::{
    ContactForm, ContactMessage, ContactSubmitter, SimulatedSubmitter, LOADING_LABEL,
};
use crate::core::notify::{NotificationCenter, NotificationLevel};
use crate::core::page::PageController;
use crate::core::prefs::{DisplayMode, Locale, LANGUAGE_KEY, THEME_KEY};
use crate::core::storage::{KeyValueStore, MemoryStore};
use crate::i18n::TranslationTable;

#[test]
fn fresh_visit_end_to_end() {
    let config = SiteConfig {
        submit_delay_ms: 20,
        ..SiteConfig::default()
    };
    let store = MemoryStore::new();
    let table = TranslationTable::embedded().unwrap();

    let mut page = PageController::initialize(&store, &table);
    assert_eq!(page.mode(), DisplayMode::Light);
    assert_eq!(page.locale(), Locale::En);

    page.toggle_display_mode(&store);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(page.mode().icon_class(), "bi bi-sun");

    page.toggle_locale(&store, &table);
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    assert_eq!(page.locale().dir(), "rtl");
    assert_eq!(page.locale().toggle_label(), "English");

    let mut form = ContactForm::default();
    form.draft = ContactMessage {
        name: "Omar".into(),
        email: "omar@example.com".into(),
        subject: "Quote".into(),
        message: "Office network for 20 seats.".into(),
    };
    let mut center = NotificationCenter::default();
    let submitter = SimulatedSubmitter::new(config.submit_delay_ms);

    let payload = form.begin_submit().unwrap();
    assert!(form.button.disabled());
    assert_eq!(form.button.label(&page.markup("form-send")), LOADING_LABEL);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let outcome = rt.block_on(submitter.submit(payload));

    let success = page.markup("notify-sent");
    let id = form.complete(outcome, &mut center, &success);
    assert_eq!(form.draft, ContactMessage::default());
    assert!(!form.button.disabled());
    assert_eq!(form.button.label(&page.markup("form-send")), "إرسال الرسالة");

    let banner = center.items()[0].clone();
    assert_eq!(banner.id, id);
    assert_eq!(banner.level, NotificationLevel::Success);
    assert_eq!(banner.message, "تم إرسال رسالتك بنجاح!");

    let ttl = config.notification_ttl_ms;
    assert_eq!(center.expire(banner.created_at + Duration::milliseconds(4_999), ttl), 0);
    assert_eq!(center.expire(banner.created_at + Duration::milliseconds(5_000), ttl), 1);
    assert!(!center.dismiss(id));
}

#[test]
fn reload_reproduces_persisted_state() {
    let store = MemoryStore::new();
    let table = TranslationTable::embedded().unwrap();

    let mut first = PageController::initialize(&store, &table);
    first.toggle_display_mode(&store);
    first.toggle_locale(&store, &table);

    let reloaded = PageController::initialize(&store, &table);
    assert_eq!(reloaded.mode(), DisplayMode::Dark);
    assert_eq!(reloaded.locale(), Locale::Ar);
    assert_eq!(reloaded.text(), first.text());
}
