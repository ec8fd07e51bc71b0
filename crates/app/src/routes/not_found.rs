use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Rendered for any path outside the route table. Signed-in staff are
/// pointed back to the dashboard, everyone else to the sign-in page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let brand = services::app_config().ui.brand.clone();

    let (target, label) = if auth.is_authenticated() {
        (Route::Dashboard {}, "Back to Dashboard")
    } else {
        (Route::Login {}, "Go to Sign In")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        section { class: "not-found-page",
            div { class: "not-found-card",
                span { class: "not-found-brand", "{brand}" }
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    ". Check the address or use the link below."
                }
                Link { to: target, class: "not-found-link", "{label}" }
            }
        }
    }
}
