use dioxus::prelude::*;

use crate::components::{ContactForm, Reveal};
use crate::core::page::navigate_to_fragment;
use crate::site::use_site;

/// Overview cards: (element id, icon, title key, text key).
const OVERVIEW_CARDS: &[(&str, &str, &str, &str)] = &[
    ("card-support", "bi bi-tools", "service-support-title", "service-support-text"),
    ("card-network", "bi bi-router", "service-network-title", "service-network-text"),
    ("card-cloud", "bi bi-shield-check", "service-cloud-title", "service-cloud-text"),
];

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let page = site.page.read();
    let t = |key: &str| page.markup(key);

    let hero_title = t("hero-title");
    let hero_subtitle = t("hero-subtitle");
    let hero_cta = t("hero-cta");
    let hero_card_title = t("hero-card-title");
    let hero_card_text = t("hero-card-text");
    let services_heading = t("services-heading");
    let services_intro = t("services-intro");
    let about_title = t("about-title");
    let about_text = t("about-text");
    let cards: Vec<(&str, &str, String, String)> = OVERVIEW_CARDS
        .iter()
        .map(|(id, icon, title, text)| (*id, *icon, t(title), t(text)))
        .collect();
    drop(page);

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__inner",
                Reveal { id: "hero-content", class: "hero-content",
                    h1 { class: "hero__title", dangerous_inner_html: "{hero_title}" }
                    p { class: "hero__subtitle", dangerous_inner_html: "{hero_subtitle}" }
                    a {
                        class: "btn btn-primary hero__cta",
                        href: "#contact",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            navigate_to_fragment("#contact");
                        },
                        dangerous_inner_html: "{hero_cta}",
                    }
                }
                Reveal { id: "hero-card", class: "hero-card",
                    i { class: "bi bi-headset hero-card__icon" }
                    h3 { dangerous_inner_html: "{hero_card_title}" }
                    p { dangerous_inner_html: "{hero_card_text}" }
                }
            }
        }

        section { id: "services", class: "page-section services-overview",
            h2 { class: "page-section__title", dangerous_inner_html: "{services_heading}" }
            p { class: "page-section__intro", dangerous_inner_html: "{services_intro}" }
            div { class: "services-overview__grid",
                for (id, icon, title, text) in cards {
                    Reveal { key: "{id}", id: "{id}", class: "card",
                        i { class: "{icon} card__icon" }
                        h3 { class: "card__title", dangerous_inner_html: "{title}" }
                        p { class: "card__text", dangerous_inner_html: "{text}" }
                    }
                }
            }
        }

        section { id: "about", class: "page-section about",
            Reveal { id: "about-card", class: "card about__card",
                h2 { class: "page-section__title", dangerous_inner_html: "{about_title}" }
                p { dangerous_inner_html: "{about_text}" }
            }
        }

        section { id: "contact", class: "page-section",
            ContactForm {}
        }
    }
}
