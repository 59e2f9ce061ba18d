//! Local persistence for the page preferences.
//!
//! The browser build talks to `window.localStorage`; native builds (SSR,
//! tests) keep a small JSON file in the platform data directory. Both sit
//! behind [`KeyValueStore`] so controllers never care which one they got.

use std::cell::RefCell;
use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend rejected the write: {0}")]
    Backend(String),
    #[error("failed to write preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value store with interior mutability; the UI only ever holds
/// shared references to it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store used by tests and as a fallback when no backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`, looked up on every access.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStore;

    impl LocalStore {
        pub fn open() -> Self {
            Self
        }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{KeyValueStore, StorageError};

    const FILE_NAME: &str = "preferences.json";

    /// JSON file mirror of `localStorage` for native targets.
    #[derive(Debug)]
    pub struct LocalStore {
        path: Option<PathBuf>,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl LocalStore {
        pub fn open() -> Self {
            let path = ProjectDirs::from("com", "HorizonIT", "brochure-site")
                .map(|dirs| dirs.data_dir().join(FILE_NAME));
            Self::at(path)
        }

        /// Store backed by `path`; `None` keeps everything in memory.
        pub fn at(path: Option<PathBuf>) -> Self {
            let entries = path.as_deref().map(read_entries).unwrap_or_default();
            Self {
                path,
                entries: RefCell::new(entries),
            }
        }

        fn flush(&self) -> Result<(), StorageError> {
            let Some(path) = self.path.as_ref() else {
                return Ok(());
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let encoded = serde_json::to_string_pretty(&*self.entries.borrow())?;
            fs::write(path, encoded)?;
            Ok(())
        }
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), "ignoring unreadable preferences file: {err}");
            BTreeMap::new()
        })
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self.flush()
        }
    }
}

pub use backend::LocalStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("brochure-prefs-{}", uuid::Uuid::new_v4()));
        let path = dir.join("preferences.json");

        let store = LocalStore::at(Some(path.clone()));
        store.set("language", "ar").unwrap();
        drop(store);

        let reopened = LocalStore::at(Some(path));
        assert_eq!(reopened.get("language").as_deref(), Some("ar"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = std::env::temp_dir().join(format!("brochure-prefs-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, "{{ definitely not json").unwrap();

        let store = LocalStore::at(Some(path));
        assert_eq!(store.get("theme"), None);

        let _ = std::fs::remove_dir_all(dir);
    }
}
