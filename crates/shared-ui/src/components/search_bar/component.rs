use dioxus::prelude::*;

/// Filter row above a list. Lays out a search box and any filter
/// controls passed as children.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            input {
                class: "search-bar-input",
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_search.call(evt.value()),
            }
            {children}
        }
    }
}
