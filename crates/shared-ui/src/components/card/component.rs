use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] description: String) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if !description.is_empty() {
                p { class: "card-description", "{description}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Single headline figure (count, total) with a caption.
#[component]
pub fn StatCard(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        Card { class: "stat-card",
            span { class: "stat-label", "{label}" }
            strong { class: "stat-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-hint", "{hint}" }
            }
        }
    }
}
