use std::cell::RefCell;
use std::rc::Rc;

use services::{
    CredentialVerifier, MemoryStore, PreferenceService, SessionStore,
    StaticCredentials, Subscription,
};
use shared_types::{evaluate, AccessDecision, GuardClass, Preference};

pub const ADMIN_EMAIL: &str = "admin@hospital.com";
pub const ADMIN_PASSWORD: &str = "password";
pub const SECURE_CODE: &str = "admin123";

/// A session store over a fresh in-memory profile. The returned
/// `MemoryStore` shares its entries with the one inside the session store.
pub fn test_session_store() -> (SessionStore, MemoryStore) {
    let storage = MemoryStore::new();
    let store = SessionStore::new(verifier(), Rc::new(storage.clone()));
    (store, storage)
}

pub fn verifier() -> Rc<dyn CredentialVerifier> {
    Rc::new(StaticCredentials::default())
}

/// A session store that has already signed in as the admin.
pub fn signed_in() -> (SessionStore, MemoryStore) {
    let (mut store, storage) = test_session_store();
    store
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .unwrap_or_else(|e| panic!("admin login failed: {e}"));
    (store, storage)
}

/// Decision for a route while no secondary challenge has been passed.
pub fn decide(class: GuardClass, store: &SessionStore) -> AccessDecision {
    evaluate(class, store.is_authenticated(), false)
}

/// One open browser tab: its own preference service (and subscriber
/// list) over the profile's shared storage.
pub fn open_tab(profile: &MemoryStore) -> PreferenceService {
    PreferenceService::new(Rc::new(profile.clone()))
}

/// A mounted view holding a cached copy of one preference, refreshed only
/// when a change notification for its key arrives.
pub struct MountedView<P: Preference> {
    value: Rc<RefCell<P::Value>>,
    _subscription: Subscription,
}

impl<P: Preference> MountedView<P> {
    pub fn mount(prefs: &PreferenceService) -> Self {
        let value = Rc::new(RefCell::new(prefs.get::<P>()));
        let cache = Rc::clone(&value);
        let source = prefs.clone();
        let subscription = prefs.subscribe(move |change| {
            if change.affects(P::KEY) {
                *cache.borrow_mut() = source.get::<P>();
            }
        });
        Self {
            value,
            _subscription: subscription,
        }
    }

    pub fn value(&self) -> P::Value {
        self.value.borrow().clone()
    }
}
