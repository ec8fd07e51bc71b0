use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ── Trait ────────────────────────────────────────────────────────────

/// Durable string-keyed, string-valued storage.
///
/// Keys are process-wide: every open view of the same browser profile
/// reads and writes the same entries. Writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

// ── In-memory implementation ────────────────────────────────────────

/// Volatile store used by tests and by non-web builds.
///
/// Clones share the same entries, so two clones behave like two browser
/// tabs over one profile.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// ── Browser implementation ──────────────────────────────────────────

#[cfg(feature = "web")]
mod browser {
    use super::KeyValueStore;
    use crate::preferences::{PreferenceService, StorageChange};
    use wasm_bindgen::{closure::Closure, JsCast};

    /// `window.localStorage`. Failures (private mode, quota) are logged and
    /// otherwise ignored; reads then fall back to preference defaults.
    pub struct LocalStorage;

    impl LocalStorage {
        /// Returns `None` when the page has no usable `localStorage`.
        pub fn open() -> Option<Self> {
            Self::storage().map(|_| LocalStorage)
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok()?
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok()?
        }

        fn set(&self, key: &str, value: &str) {
            let written = Self::storage().map(|s| s.set_item(key, value).is_ok());
            if written != Some(true) {
                tracing::warn!(key, "Failed to write to localStorage");
            }
        }

        fn remove(&self, key: &str) {
            let removed = Self::storage().map(|s| s.remove_item(key).is_ok());
            if removed != Some(true) {
                tracing::warn!(key, "Failed to remove from localStorage");
            }
        }
    }

    /// Forward the window `storage` event (fired for writes made by other
    /// tabs) into the preference service. Installed once for the lifetime
    /// of the page.
    pub fn forward_storage_events(service: &PreferenceService) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let service = service.clone();
        let handler = Closure::<dyn Fn(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                let change = match event.key() {
                    Some(key) => StorageChange::key(key),
                    None => StorageChange::cleared(),
                };
                service.notify(&change);
            },
        );
        if window
            .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to subscribe to storage events");
            return;
        }
        handler.forget();
    }
}

#[cfg(feature = "web")]
pub use browser::{forward_storage_events, LocalStorage};

/// The store the app should use on this platform: `localStorage` on the
/// web when available, otherwise an in-memory store.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(feature = "web")]
    {
        if let Some(local) = LocalStorage::open() {
            return Rc::new(local);
        }
        tracing::warn!("localStorage unavailable; preferences will not survive a reload");
    }
    Rc::new(MemoryStore::new())
}
