use dioxus::prelude::*;

/// Top bar of the page shell: current page title on the left, signed-in
/// user on the right. `children` renders between the two (actions).
#[component]
pub fn Navbar(
    title: String,
    #[props(default)] user_name: String,
    #[props(default)] user_role: String,
    #[props(default)] initials: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "hms-navbar",
            h1 { class: "hms-navbar-title", "{title}" }
            div { class: "hms-navbar-actions", {children} }
            if !user_name.is_empty() {
                div { class: "hms-navbar-user",
                    span { class: "hms-avatar", "aria-hidden": "true", "{initials}" }
                    div { class: "hms-navbar-user-text",
                        span { class: "hms-navbar-user-name", "{user_name}" }
                        if !user_role.is_empty() {
                            span { class: "hms-navbar-user-role", "{user_role}" }
                        }
                    }
                }
            }
        }
    }
}
