//! Platform-agnostic state and helpers shared by the site components.

pub mod config;
pub mod contact;
pub mod debounce;
pub mod notify;
pub mod page;
pub mod platform;
pub mod prefs;
pub mod reveal;
pub mod storage;
pub mod timing;
