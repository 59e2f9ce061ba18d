use dioxus::prelude::*;

use crate::components::{NotificationStack, SiteNavbar};
use crate::site::use_site;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Page chrome shared by every route. The root element mirrors the theme and
/// locale attributes so server-rendered markup matches the browser state.
#[component]
pub fn SiteShell(
    nav_links: Element,
    #[props(default)] home_path: Option<String>,
    children: Element,
) -> Element {
    let site = use_site();
    let page = site.page.read();
    let theme = page.mode().data_theme();
    let dir = page.locale().dir();
    let lang = page.locale().lang();
    let footer = page.markup("footer-rights");
    drop(page);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css",
        }

        div { class: "site", "data-theme": theme, dir, lang,
            SiteNavbar { home_path, {nav_links} }
            main { class: "site__main", {children} }
            footer { class: "site__footer",
                p { dangerous_inner_html: "{footer}" }
            }
            NotificationStack {}
        }
    }
}
