use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::page::{navbar_scrolled, navigate_to_fragment, section_href, NAVBAR_SCROLLED_CLASS};
use crate::core::platform;
use crate::site::use_site;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Same-page sections reachable from the navbar: (href, translation key).
pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("#home", "nav-home"),
    ("#services", "nav-services"),
    ("#about", "nav-about"),
    ("#contact", "nav-contact"),
];

/// Top navigation: section anchors, theme and language toggles.
///
/// `children` are appended to the link list; launchers pass their
/// router `Link`s there since this crate does not know their `Route` enum.
/// `home_path` is set when the current route is not the one holding the
/// sections; anchors then navigate there instead of scrolling.
#[component]
pub fn SiteNavbar(#[props(default)] home_path: Option<String>, children: Element) -> Element {
    let site = use_site();
    let threshold = site.services.config.navbar_scroll_threshold;

    let mut scrolled = use_signal(move || navbar_scrolled(platform::scroll_y(), threshold));
    let scroll = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        while rx.next().await.is_some() {
            let next = navbar_scrolled(platform::scroll_y(), threshold);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }
    });
    let scroll_tx = scroll.tx();
    use_hook(move || {
        Rc::new(platform::WindowListener::attach("scroll", move || {
            let _ = scroll_tx.unbounded_send(());
        }))
    });

    let page = site.page.read();
    let brand = page.markup("brand-name");
    let links: Vec<(&'static str, String, String)> = NAV_ANCHORS
        .iter()
        .map(|(href, key)| (*href, section_href(href, home_path.as_deref()), page.markup(key)))
        .collect();
    let brand_href = section_href("#home", home_path.as_deref());
    let scroll_in_place = home_path.is_none();
    let theme_icon = page.mode().icon_class();
    let language_label = page.locale().toggle_label();
    drop(page);

    let nav_class = if scrolled() {
        format!("navbar {NAVBAR_SCROLLED_CLASS}")
    } else {
        "navbar".to_string()
    };

    let site_for_language = site.clone();
    let site_for_theme = site;

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { id: "navbar", class: "{nav_class}",
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "{brand_href}",
                    onclick: move |evt: MouseEvent| {
                        if scroll_in_place {
                            evt.prevent_default();
                            navigate_to_fragment("#home");
                        }
                    },
                    dangerous_inner_html: "{brand}",
                }

                ul { class: "navbar__links",
                    for (anchor, href, label) in links {
                        li { key: "{anchor}", class: "navbar__item",
                            a {
                                class: "navbar__link",
                                href: "{href}",
                                onclick: move |evt: MouseEvent| {
                                    if scroll_in_place {
                                        evt.prevent_default();
                                        navigate_to_fragment(anchor);
                                    }
                                },
                                dangerous_inner_html: "{label}",
                            }
                        }
                    }
                    {children}
                }

                div { class: "navbar__actions",
                    button {
                        id: "languageToggle",
                        r#type: "button",
                        class: "navbar__toggle",
                        onclick: move |_| site_for_language.toggle_locale(),
                        i { class: "bi bi-translate", aria_hidden: "true" }
                        span { id: "languageText", "{language_label}" }
                    }
                    button {
                        id: "themeToggle",
                        r#type: "button",
                        class: "navbar__toggle",
                        onclick: move |_| site_for_theme.toggle_display_mode(),
                        i { id: "themeIcon", class: "{theme_icon}" }
                    }
                }
            }
        }
    }
}
