use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use shared_types::Preference;

use crate::storage::{KeyValueStore, MemoryStore};

/// A change to a storage key, delivered to every subscriber.
///
/// `key == None` means the whole store was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    key: Option<String>,
}

impl StorageChange {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn cleared() -> Self {
        Self { key: None }
    }

    /// Whether a subscriber interested in `key` should re-read it.
    pub fn affects(&self, key: &str) -> bool {
        self.key.as_deref().map_or(true, |k| k == key)
    }
}

type Listener = Rc<dyn Fn(&StorageChange)>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

/// Typed access to UI preferences plus the change-notification channel
/// that keeps concurrently mounted views in agreement.
///
/// Cheap to clone; clones share the store and the subscriber list.
#[derive(Clone)]
pub struct PreferenceService {
    store: Rc<dyn KeyValueStore>,
    listeners: Rc<Listeners>,
}

impl PreferenceService {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            listeners: Rc::new(Listeners::default()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    /// Read a preference straight from storage. Missing or unparseable
    /// values yield the preference's default.
    pub fn get<P: Preference>(&self) -> P::Value {
        P::read(self.store.get(P::KEY).as_deref())
    }

    /// Write a preference and notify subscribers.
    ///
    /// Writing the value already stored is a no-op and emits nothing.
    pub fn set<P: Preference>(&self, value: &P::Value) {
        let encoded = P::encode(value);
        if self.store.get(P::KEY) == encoded {
            return;
        }
        match encoded.as_deref() {
            Some(raw) => self.store.set(P::KEY, raw),
            None => self.store.remove(P::KEY),
        }
        tracing::debug!(
            key = P::KEY,
            value = encoded.as_deref().unwrap_or("<unset>"),
            "Preference updated"
        );
        self.notify(&StorageChange::key(P::KEY));
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&StorageChange) + 'static) -> Subscription {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver a change to every current subscriber. Also the entry point
    /// for changes made outside this process (other browser tabs).
    pub fn notify(&self, change: &StorageChange) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }
}

impl fmt::Debug for PreferenceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceService")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle for a registered listener; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .entries
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
