//! Client-side services behind the dashboard UI: sign-in state, the
//! secondary challenge on protected sections, typed preferences with
//! cross-view change notification, and configuration.

pub mod auth;
pub mod config;
pub mod preferences;
pub mod storage;

pub use auth::{CredentialVerifier, GateState, SecondaryGate, SessionStore, StaticCredentials};
pub use config::{app_config, load_config, parse_config};
pub use preferences::{PreferenceService, StorageChange, Subscription};
pub use storage::{default_store, KeyValueStore, MemoryStore};

#[cfg(feature = "web")]
pub use storage::{forward_storage_events, LocalStorage};
