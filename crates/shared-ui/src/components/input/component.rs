use dioxus::prelude::*;

/// Labelled text input. `on_enter` fires when Enter is pressed inside it.
#[component]
pub fn Input(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
    #[props(default)] id: String,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] autofocus: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autofocus: autofocus,
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        if let Some(handler) = &on_enter {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}
