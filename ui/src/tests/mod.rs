mod i18n_completeness;
mod page_flow;
mod site_lifetime;
