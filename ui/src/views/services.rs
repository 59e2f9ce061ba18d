use dioxus::prelude::*;

use crate::catalog::ServiceCatalog;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "page page-services",
            ServiceCatalog {}
        }
    }
}
