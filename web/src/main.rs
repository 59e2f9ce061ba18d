use dioxus::prelude::*;

use ui::components::SiteShell;
use ui::core::config::SiteConfig;
use ui::site::{use_site, use_site_provider, SiteServices};
use ui::views::{Home, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_hook(|| SiteServices::local(SiteConfig::default()));
    use_site_provider(services);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        Router::<Route> {}
    }
}

/// Web-specific layout: wraps the shared shell and supplies the router links
/// the shared navbar cannot build itself.
#[component]
fn WebLayout() -> Element {
    let site = use_site();
    let catalog_label = site.page.read().markup("nav-catalog");
    let home_path = match use_route::<Route>() {
        Route::Home {} => None,
        _ => Some(Route::Home {}.to_string()),
    };

    rsx! {
        SiteShell {
            home_path,
            nav_links: rsx! {
                li { class: "navbar__item",
                    Link { class: "navbar__link", to: Route::Services {}, "{catalog_label}" }
                }
            },
            Outlet::<Route> {}
        }
    }
}
