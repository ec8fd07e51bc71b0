use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{use_toast, Button, Card, CardContent, CardHeader, Input, ToastOptions};

/// Email/password sign-in. A visitor who already has a session goes
/// straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let mut submit = move || {
        error_msg.set(None);
        match auth.login(&email(), &password()) {
            Ok(_) => {
                toast.success(
                    "Login successful".to_string(),
                    ToastOptions::new().description("Welcome back to HMS Dashboard"),
                );
                navigator().replace(Route::Dashboard {});
            }
            Err(e) => {
                password.set(String::new());
                error_msg.set(Some(e.user_message().to_string()));
                toast.error(e.title().to_string(), ToastOptions::new().description(e.user_message()));
            }
        }
    };

    let brand = services::app_config().ui.brand.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: brand,
                    description: "Sign in to manage doctors, patients and billing",
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit();
                        },
                        div { class: "auth-field",
                            Input {
                                id: "email",
                                label: "Email",
                                input_type: "email",
                                placeholder: "admin@hospital.com",
                                value: email(),
                                autofocus: true,
                                on_input: move |v: String| email.set(v),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                id: "password",
                                label: "Password",
                                input_type: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |v: String| password.set(v),
                            }
                        }
                        Button { kind: "submit", class: "auth-submit", "Sign In" }
                    }
                }
            }
        }
    }
}
