//! Page-view scoped state shared by every component.
//!
//! A launcher builds [`SiteServices`] once and hands it to
//! [`use_site_provider`] in its root component; everything below reaches the
//! same state through [`use_site`]. Nothing here is global: a new page view
//! gets a fresh controller.
//!
//! Continuations that must finish regardless of which route is showing (the
//! contact submission, banner expiry) run on the root scope, so unmounting
//! the component that started them does not cancel them.

use std::rc::Rc;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::core::config::SiteConfig;
use crate::core::contact::{ContactForm, ContactSubmitter, SimulatedSubmitter, SUCCESS_MESSAGE};
use crate::core::notify::{NotificationCenter, NotificationLevel};
use crate::core::page::PageController;
use crate::core::reveal::RevealTracker;
use crate::core::storage::{KeyValueStore, LocalStore};
use crate::core::timing;
use crate::i18n::TranslationTable;

/// Long-lived collaborators of the page controllers.
#[derive(Clone)]
pub struct SiteServices {
    pub config: SiteConfig,
    pub store: Rc<dyn KeyValueStore>,
    pub table: Rc<TranslationTable>,
    pub submitter: Rc<dyn ContactSubmitter>,
}

impl SiteServices {
    /// Browser-local storage, embedded translations and the simulated
    /// contact endpoint.
    pub fn local(config: SiteConfig) -> Self {
        let table = TranslationTable::embedded().unwrap_or_else(|err| {
            tracing::error!("translations unavailable, page text stays as rendered: {err}");
            TranslationTable::empty()
        });
        let submitter = SimulatedSubmitter::new(config.submit_delay_ms);
        Self {
            config,
            store: Rc::new(LocalStore::open()),
            table: Rc::new(table),
            submitter: Rc::new(submitter),
        }
    }
}

#[derive(Clone)]
pub struct Site {
    pub services: SiteServices,
    pub page: Signal<PageController>,
    pub notifications: Signal<NotificationCenter>,
    pub reveals: Signal<RevealTracker>,
    pub contact: Signal<ContactForm>,
}

impl Site {
    pub fn toggle_display_mode(&self) {
        let mut page = self.page;
        let store = Rc::clone(&self.services.store);
        page.with_mut(|p| p.toggle_display_mode(store.as_ref()));
    }

    pub fn toggle_locale(&self) {
        let mut page = self.page;
        let store = Rc::clone(&self.services.store);
        let table = Rc::clone(&self.services.table);
        page.with_mut(|p| p.toggle_locale(store.as_ref(), table.as_ref()));
    }

    pub fn notify(&self, message: impl Into<String>, level: NotificationLevel) -> Uuid {
        let mut notifications = self.notifications;
        let id = notifications.with_mut(|center| center.push(message, level));
        self.schedule_expiry(id);
        id
    }

    /// Remove `id` after the configured lifetime unless it is already gone.
    pub fn schedule_expiry(&self, id: Uuid) {
        let mut notifications = self.notifications;
        let ttl_ms = self.services.config.notification_ttl_ms;
        spawn_forever(async move {
            timing::sleep_ms(ttl_ms).await;
            notifications.with_mut(|center| {
                let removed = usize::from(center.dismiss(id)) + center.expire(timing::now(), ttl_ms);
                if removed > 0 {
                    tracing::debug!(%id, removed, "notifications expired");
                }
            });
        });
    }

    /// Send the current contact draft. A no-op while a submission is
    /// already in flight.
    pub fn submit_contact(&self) {
        let mut contact = self.contact;
        let Some(message) = contact.with_mut(|form| form.begin_submit()) else {
            return;
        };
        let site = self.clone();
        spawn_forever(async move {
            let outcome = site.services.submitter.submit(message).await;
            let success = site
                .page
                .peek()
                .text()
                .get("notify-sent")
                .map(str::to_owned)
                .unwrap_or_else(|| SUCCESS_MESSAGE.to_string());

            let mut notifications = site.notifications;
            let id = notifications
                .with_mut(|center| contact.with_mut(|form| form.complete(outcome, center, &success)));
            site.schedule_expiry(id);
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        let mut notifications = self.notifications;
        notifications.with_mut(|center| center.dismiss(id));
    }
}

/// Initialize the page controller and provide the site context.
pub fn use_site_provider(services: SiteServices) -> Site {
    let page = use_signal({
        let services = services.clone();
        move || PageController::initialize(services.store.as_ref(), services.table.as_ref())
    });
    let notifications = use_signal(NotificationCenter::default);
    let reveals = use_signal(RevealTracker::default);
    let contact = use_signal(ContactForm::default);
    use_context_provider(move || Site {
        services,
        page,
        notifications,
        reveals,
        contact,
    })
}

pub fn use_site() -> Site {
    use_context::<Site>()
}
