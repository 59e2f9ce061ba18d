//! Site-level continuations keep running after the component that started
//! them unmounts: banners still expire and submissions still complete.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::contact::SimulatedSubmitter;
use crate::core::notify::NotificationLevel;
use crate::core::storage::MemoryStore;
use crate::core::timing;
use crate::i18n::TranslationTable;
use crate::site::{use_site, use_site_provider, Site, SiteServices};

const TTL_MS: u64 = 50;
const SUBMIT_DELAY_MS: u64 = 20;
const UNMOUNT_AFTER_MS: u64 = 5;

thread_local! {
    static BANNERS: Cell<usize> = const { Cell::new(0) };
    static PEAK_BANNERS: Cell<usize> = const { Cell::new(0) };
    static SENDING: Cell<bool> = const { Cell::new(false) };
    static DRAFT_NAME: Cell<Option<String>> = const { Cell::new(None) };
}

fn test_services() -> SiteServices {
    let config = SiteConfig {
        notification_ttl_ms: TTL_MS,
        submit_delay_ms: SUBMIT_DELAY_MS,
        ..SiteConfig::default()
    };
    SiteServices {
        store: Rc::new(MemoryStore::new()),
        table: Rc::new(TranslationTable::embedded().unwrap()),
        submitter: Rc::new(SimulatedSubmitter::new(config.submit_delay_ms)),
        config,
    }
}

fn reset_observations() {
    BANNERS.with(|b| b.set(0));
    PEAK_BANNERS.with(|b| b.set(0));
    SENDING.with(|s| s.set(false));
    DRAFT_NAME.with(|d| d.set(None));
}

/// Mirror the site state into thread locals; called on every root render.
fn record(site: &Site) {
    let banners = site.notifications.read().items().len();
    BANNERS.with(|b| b.set(banners));
    PEAK_BANNERS.with(|b| b.set(b.get().max(banners)));

    let contact = site.contact.read();
    SENDING.with(|s| s.set(contact.button.disabled()));
    DRAFT_NAME.with(|d| d.set(Some(contact.draft.name.clone())));
}

fn run_for(dom: &mut VirtualDom, ms: u64) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    rt.block_on(async {
        dom.rebuild_in_place();
        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            let _ = dom.render_immediate_to_vec();
        }
    });
}

/// Root that shows `child` only for the first few milliseconds.
fn use_short_lived_child() -> Signal<bool> {
    let mut show = use_signal(|| true);
    use_future(move || async move {
        timing::sleep_ms(UNMOUNT_AFTER_MS).await;
        show.set(false);
    });
    show
}

#[component]
fn NotifyThenLeave() -> Element {
    let site = use_site_provider(use_hook(test_services));
    let show = use_short_lived_child();
    record(&site);
    rsx! {
        if show() {
            Notifier {}
        }
    }
}

#[component]
fn Notifier() -> Element {
    let site = use_site();
    use_hook(move || {
        spawn(async move {
            site.notify("Message sent successfully!", NotificationLevel::Success);
        });
    });
    rsx! { p { "notifier" } }
}

#[component]
fn SubmitThenLeave() -> Element {
    let site = use_site_provider(use_hook(test_services));
    let show = use_short_lived_child();
    record(&site);
    rsx! {
        if show() {
            Submitter {}
        }
    }
}

#[component]
fn Submitter() -> Element {
    let site = use_site();
    use_hook(move || {
        spawn(async move {
            let mut contact = site.contact;
            contact.with_mut(|form| {
                form.draft.name = "Omar".into();
                form.draft.email = "omar@example.com".into();
            });
            site.submit_contact();
        });
    });
    rsx! { p { "submitter" } }
}

#[test]
fn banner_expires_after_its_component_unmounts() {
    reset_observations();
    let mut dom = VirtualDom::new(NotifyThenLeave);
    run_for(&mut dom, 300);

    assert_eq!(PEAK_BANNERS.with(Cell::get), 1, "banner was never shown");
    assert_eq!(
        BANNERS.with(Cell::get),
        0,
        "banner outlived its {TTL_MS} ms lifetime"
    );
}

#[test]
fn banner_is_still_up_before_its_lifetime_ends() {
    reset_observations();
    let mut dom = VirtualDom::new(NotifyThenLeave);
    run_for(&mut dom, TTL_MS / 2);

    assert_eq!(BANNERS.with(Cell::get), 1);
}

#[test]
fn submission_completes_after_the_form_unmounts() {
    reset_observations();
    let mut dom = VirtualDom::new(SubmitThenLeave);
    run_for(&mut dom, 300);

    assert!(!SENDING.with(Cell::get), "submit button stayed disabled");
    assert_eq!(DRAFT_NAME.with(|d| d.take()).as_deref(), Some(""));
    assert_eq!(PEAK_BANNERS.with(Cell::get), 1, "success banner was never raised");
    assert_eq!(BANNERS.with(Cell::get), 0, "success banner never expired");
}
