use dioxus::prelude::*;
use services::SecondaryGate;
use shared_types::{evaluate, AccessDecision, GuardClass, ProtectedSection};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogFooter, DialogRoot,
    DialogTitle, Input, ToastOptions,
};

use crate::auth::use_auth;
use crate::routes::Route;

/// Fine guard around a protected view.
///
/// Holds its own [`SecondaryGate`], so every mount starts locked and the
/// code is asked for again after navigating away. Children render only
/// once the gate is open.
#[component]
pub fn SecureSection(section: ProtectedSection, children: Element) -> Element {
    let gate = use_section_gate(section);
    rsx! {
        SecureSectionBody { gate, {children} }
    }
}

/// A locked gate scoped to the calling component.
pub(crate) fn use_section_gate(section: ProtectedSection) -> Signal<SecondaryGate> {
    use_signal(move || SecondaryGate::new(section))
}

/// Renders the challenge or the children depending on `gate`.
#[component]
pub(crate) fn SecureSectionBody(gate: Signal<SecondaryGate>, children: Element) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut gate = gate;
    let mut code = use_signal(String::new);
    let section = gate.read().section();

    let decision = evaluate(
        GuardClass::Secured(section),
        auth.is_authenticated(),
        gate.read().is_unlocked(),
    );

    let mut submit = move || {
        let entered = code();
        let result = auth.unlock(&mut gate.write(), &entered);
        code.set(String::new());
        match result {
            Ok(()) => {
                toast.success("Access granted".to_string(), ToastOptions::new());
            }
            Err(e) => {
                toast.error(e.user_message().to_string(), ToastOptions::new());
            }
        }
    };

    let leave = move || {
        navigator().push(Route::Dashboard {});
    };

    match decision {
        AccessDecision::Render => rsx! { {children} },
        AccessDecision::RedirectToLogin => {
            navigator().replace(Route::Login {});
            rsx! {}
        }
        AccessDecision::Challenge(section) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./secure_section.css") }

            div { class: "secure-section-locked",
                p { "{section.display_name()} is password protected." }
            }

            DialogRoot {
                open: true,
                on_open_change: move |open: bool| {
                    if !open {
                        leave();
                    }
                },
                DialogContent {
                    DialogTitle { "Authentication Required" }
                    DialogDescription {
                        "This is a secure section of the HMS. Please enter the password to continue."
                    }
                    Input {
                        id: "secure-section-code",
                        input_type: "password",
                        label: "Password",
                        placeholder: "Enter password",
                        value: code(),
                        autofocus: true,
                        on_input: move |v: String| code.set(v),
                        on_enter: move |_| submit(),
                    }
                    DialogFooter {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| leave(),
                            "Cancel"
                        }
                        Button { onclick: move |_| submit(), "Access" }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use crate::routes::accounts::AccountsPage;
    use services::{MemoryStore, SessionStore, StaticCredentials};
    use std::cell::Cell;
    use std::rc::Rc;

    fn signed_in_state() -> AuthState {
        let mut store = SessionStore::new(
            Rc::new(StaticCredentials::default()),
            Rc::new(MemoryStore::new()),
        );
        store
            .login("admin@hospital.com", "password")
            .unwrap_or_else(|e| panic!("login failed: {e}"));
        AuthState::new(store)
    }

    /// Accounts visit whose gate was opened with the right code.
    #[component]
    fn UnlockedVisit() -> Element {
        let auth = use_auth();
        let gate = use_section_gate(ProtectedSection::Accounts);
        use_hook(move || {
            let mut gate = gate;
            auth.unlock(&mut gate.write(), "admin123")
                .unwrap_or_else(|e| panic!("unlock failed: {e}"));
        });
        rsx! {
            SecureSectionBody { gate, AccountsPage {} }
        }
    }

    /// Visit 1 unlocks, any later visit remounts a plain `SecureSection`.
    #[component]
    fn Harness(visit: Rc<Cell<u32>>) -> Element {
        use_context_provider(signed_in_state);
        rsx! {
            shared_ui::ToastProvider {
                if visit.get() == 1 {
                    UnlockedVisit {}
                } else {
                    SecureSection { section: ProtectedSection::Accounts, AccountsPage {} }
                }
            }
        }
    }

    fn is_locked(html: &str) -> bool {
        html.contains("secure-section-locked") && !html.contains("Total Income")
    }

    #[test]
    fn fresh_visit_shows_the_challenge_and_hides_the_ledger() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                visit: Rc::new(Cell::new(0)),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(is_locked(&html), "{html}");
        assert!(html.contains("Authentication Required"));
        assert!(html.contains("Accounts is password protected."));
    }

    #[test]
    fn unlocked_visit_renders_the_ledger() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                visit: Rc::new(Cell::new(1)),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Total Income"));
        assert!(!html.contains("Authentication Required"));
    }

    #[test]
    fn navigating_back_locks_again() {
        let visit = Rc::new(Cell::new(1));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                visit: visit.clone(),
            },
        );
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("Total Income"));

        visit.set(2);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(is_locked(&html), "{html}");
    }
}
