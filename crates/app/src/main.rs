use std::rc::Rc;

use dioxus::prelude::*;
use services::{
    default_store, load_config, CredentialVerifier, PreferenceService, SessionStore,
    StaticCredentials,
};

mod auth;
mod components;
mod format_helpers;
mod preferences;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

/// Embedded at build time; edit `config.toml` at the workspace root.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Signed-in staff member as shown by the page shell.
/// Backed by `Memo`s over `AuthState`, so it follows login and logout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub initials: Memo<String>,
    pub role_label: Memo<String>,
}

fn main() {
    load_config(CONFIG_TOML);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = services::app_config();

    // One storage handle shared by the session record and the preferences.
    let store = use_hook(default_store);

    let prefs = use_context_provider({
        let store = store.clone();
        move || PreferenceService::new(store)
    });
    #[cfg(feature = "web")]
    use_hook({
        let prefs = prefs.clone();
        move || services::forward_storage_events(&prefs)
    });
    #[cfg(not(feature = "web"))]
    let _ = prefs;

    use_context_provider(move || {
        let verifier: Rc<dyn CredentialVerifier> =
            Rc::new(StaticCredentials::from_config(&config.auth));
        AuthState::new(SessionStore::new(verifier, store))
    });

    let auth = use_auth();
    let display_name = use_memo(move || {
        auth.session()
            .map(|s| s.display_name)
            .unwrap_or_default()
    });
    let initials = use_memo(move || auth.session().map(|s| s.initials()).unwrap_or_default());
    let role_label = use_memo(move || {
        auth.session()
            .map(|s| s.role.display_name().to_string())
            .unwrap_or_default()
    });

    use_context_provider(|| ProfileState {
        display_name,
        initials,
        role_label,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
