use dioxus::prelude::*;

use crate::core::notify::Notification;
use crate::site::use_site;

/// Fixed-position stack of the live notification banners.
#[component]
pub fn NotificationStack() -> Element {
    let site = use_site();
    let items = site.notifications.read().items().to_vec();

    rsx! {
        div { class: "notification-stack",
            for notification in items {
                NotificationBanner { key: "{notification.id}", notification }
            }
        }
    }
}

#[component]
fn NotificationBanner(notification: Notification) -> Element {
    let site = use_site();
    let close_label = site.page.read().markup("notify-close");
    let id = notification.id;

    rsx! {
        div {
            class: notification.level.css_class(),
            role: "alert",
            "{notification.message}"
            button {
                r#type: "button",
                class: "btn-close",
                aria_label: "{close_label}",
                onclick: move |_| site.dismiss(id),
            }
        }
    }
}
