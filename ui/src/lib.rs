//! Shared UI crate for the Horizon IT brochure site: page state, components
//! and views used by the launcher crates.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod site;
pub mod views;

pub mod components {
    mod site_navbar;
    pub use site_navbar::{SiteNavbar, NAV_ANCHORS};

    mod notifications;
    pub use notifications::NotificationStack;

    mod contact_form;
    pub use contact_form::ContactForm;

    mod reveal;
    pub use reveal::Reveal;

    mod site_shell;
    pub use site_shell::SiteShell;
}

#[cfg(test)]
mod tests;
