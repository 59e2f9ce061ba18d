use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform::VisibilityObserver;
use crate::core::reveal::APPEARED_CLASS;
use crate::site::use_site;

/// Wrapper that plays the entrance animation the first time it scrolls into
/// view. Without observer support the content is revealed on mount.
#[component]
pub fn Reveal(id: String, #[props(default)] class: String, children: Element) -> Element {
    let site = use_site();
    let config = site.services.config.reveal.clone();
    let mut reveals = site.reveals;

    let revealer = use_coroutine({
        let id = id.clone();
        move |mut rx: UnboundedReceiver<()>| {
            let id = id.clone();
            async move {
                while rx.next().await.is_some() {
                    let first = reveals.with_mut(|tracker| tracker.mark_visible(&id));
                    if first {
                        tracing::trace!(%id, "element revealed");
                    }
                }
            }
        }
    });

    let observer_slot: Rc<RefCell<Option<VisibilityObserver>>> = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect({
        let id = id.clone();
        move || {
            if observer_slot.borrow().is_some() || reveals.peek().has_appeared(&id) {
                return;
            }
            let tx = revealer.tx();
            let observer = VisibilityObserver::observe_once(&id, &config, move || {
                let _ = tx.unbounded_send(());
            });
            match observer {
                Some(observer) => {
                    observer_slot.borrow_mut().replace(observer);
                }
                None => revealer.send(()),
            }
        }
    });

    let appeared = reveals.read().has_appeared(&id);
    let classes = if appeared {
        format!("{class} reveal {APPEARED_CLASS}")
    } else {
        format!("{class} reveal")
    };

    rsx! {
        div { id: "{id}", class: "{classes}", {children} }
    }
}
